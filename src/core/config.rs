/// Default tolerance for approximate float comparisons, see [`gg_float::near`].
///
/// [`gg_float::near`]: crate::util::gg_float::near
pub const EPSILON: f32 = 1e-6;
