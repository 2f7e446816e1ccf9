#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{assert::*, config::*},
    util::{
        gg_float, gg_int, linalg,
        linalg::{AxisAlignedExtent, Rect, Vec2},
    },
};
