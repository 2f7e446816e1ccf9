#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector using 32-bit floating point coordinates.
///
/// [`Vec2`] is a plain value type: every operation returns a new vector. Equality is exact
/// component-wise float equality; use [`Vec2::almost_eq`] for a tolerant comparison.
///
/// # Examples
///
/// ```
/// use ggmath::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
///
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1 * 2.0, Vec2 { x: 6.0, y: 8.0 });
/// assert_eq!(v1.norm(), 5.0);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Performs a component-wise multiplication of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.component_wise(v2), Vec2 { x: 8.0, y: 15.0 });
    /// ```
    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Performs a component-wise division of two vectors.
    ///
    /// Division by a zero component follows IEEE-754 (infinity or NaN).
    #[must_use]
    pub fn component_wise_div(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// Computed with [`f32::hypot`], so large components do not overflow in an intermediate
    /// square.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Component-wise minimum. A NaN component yields the other operand's component.
    #[must_use]
    pub fn min(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }
    /// Component-wise maximum. A NaN component yields the other operand's component.
    #[must_use]
    pub fn max(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Rounds each component to the nearest integer, with halves rounded away from zero.
    #[must_use]
    pub fn round(&self) -> Vec2 {
        Vec2 {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
    #[must_use]
    pub fn floor(&self) -> Vec2 {
        Vec2 {
            x: self.x.floor(),
            y: self.y.floor(),
        }
    }
    #[must_use]
    pub fn ceil(&self) -> Vec2 {
        Vec2 {
            x: self.x.ceil(),
            y: self.y.ceil(),
        }
    }

    /// Exact test against the zero vector; `-0.0` counts as zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns whether neither component is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Each component must be within [`EPSILON`](crate::core::config::EPSILON), see
    /// [`gg_float::near`].
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        gg_float::near(self.x, rhs.x) && gg_float::near(self.y, rhs.y)
    }

    /// Clamps each coordinate into the span of `bound` on that axis.
    ///
    /// A bound with negative size is handled as if its edges were swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let bound = Rect::new(Vec2::zero(), Vec2 { x: 10.0, y: 5.0 });
    /// let v = Vec2 { x: 12.0, y: -3.0 };
    /// assert_eq!(v.clamp(&bound), Vec2 { x: 10.0, y: 0.0 });
    /// ```
    #[must_use]
    pub fn clamp(&self, bound: &Rect) -> Vec2 {
        Vec2 {
            x: gg_float::clamp_auto(self.x, bound.left(), bound.right()),
            y: gg_float::clamp_auto(self.y, bound.top(), bound.bottom()),
        }
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        Vec2::is_zero(self)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Shared queries for axis-aligned boxes described by a top-left position and a size.
///
/// The y-axis points down, so `top <= bottom` whenever the size is non-negative. Sizes are not
/// required to be non-negative; a negative size simply puts the "right" edge left of the
/// "left" edge, and the queries below are evaluated literally on those edges.
///
/// # Examples
///
/// ```
/// use ggmath::core::prelude::*;
///
/// fn is_visible<T: AxisAlignedExtent>(object: &T, viewport: &Rect) -> bool {
///     object.intersects(viewport)
/// }
///
/// let viewport = Rect::new(Vec2::zero(), Vec2 { x: 100.0, y: 100.0 });
/// let sprite = Rect::new(Vec2 { x: 95.0, y: 10.0 }, Vec2 { x: 10.0, y: 10.0 });
/// assert!(is_visible(&sprite, &viewport));
/// ```
pub trait AxisAlignedExtent {
    fn pos(&self) -> Vec2;
    fn size(&self) -> Vec2;

    fn left(&self) -> f32 {
        self.pos().x
    }
    fn right(&self) -> f32 {
        self.pos().x + self.size().x
    }
    fn top(&self) -> f32 {
        self.pos().y
    }
    fn bottom(&self) -> f32 {
        self.pos().y + self.size().y
    }

    fn top_left(&self) -> Vec2 {
        self.pos()
    }
    fn top_right(&self) -> Vec2 {
        self.pos()
            + Vec2 {
                x: self.size().x,
                y: 0.0,
            }
    }
    fn bottom_left(&self) -> Vec2 {
        self.pos()
            + Vec2 {
                x: 0.0,
                y: self.size().y,
            }
    }
    fn bottom_right(&self) -> Vec2 {
        self.pos() + self.size()
    }
    fn centre(&self) -> Vec2 {
        self.pos() + self.size() * 0.5
    }

    fn as_rect(&self) -> Rect {
        Rect::new(self.pos(), self.size())
    }

    /// Returns whether the point lies inside, inclusive on the top/left edges and exclusive on
    /// the bottom/right edges.
    fn contains_point(&self, pos: Vec2) -> bool {
        (self.left()..self.right()).contains(&pos.x) && (self.top()..self.bottom()).contains(&pos.y)
    }
    /// Returns whether the whole of `rect` lies inside, inclusive on all edges.
    fn contains_rect(&self, rect: &Rect) -> bool {
        self.left() <= rect.left()
            && rect.right() <= self.right()
            && self.top() <= rect.top()
            && rect.bottom() <= self.bottom()
    }
    /// Returns whether the interiors overlap. Rectangles that only share an edge do not
    /// intersect.
    fn intersects(&self, rect: &Rect) -> bool {
        (self.right() > rect.left() && rect.right() > self.left())
            && (self.bottom() > rect.top() && rect.bottom() > self.top())
    }
}

/// An axis-aligned rectangle defined by its top-left position and its size.
///
/// # Examples
///
/// ```
/// use ggmath::core::prelude::*;
///
/// let rect = Rect::new(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 10.0, y: 10.0 });
///
/// // Half-open containment: the far edges are outside.
/// assert!(rect.contains_point(Vec2 { x: 0.0, y: 0.0 }));
/// assert!(!rect.contains_point(Vec2 { x: 10.0, y: 10.0 }));
///
/// // Create from corner points
/// let rect = Rect::from_min_max(Vec2 { x: -1.0, y: -2.0 }, Vec2 { x: 3.0, y: 4.0 });
/// assert_eq!(rect.size(), Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(rect.centre(), Vec2 { x: 1.0, y: 1.0 });
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pos: Vec2,
    size: Vec2,
}

impl Rect {
    /// Creates a new rectangle with the given top-left position and size.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
    /// Creates a rectangle spanning `min` to `max`.
    ///
    /// The size is `max - min`, so `max` should not be less than `min` on either axis; see
    /// [`Rect::try_from_min_max`] for a checked version.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min, max - min)
    }
    pub fn try_from_min_max(min: Vec2, max: Vec2) -> Result<Self> {
        if max.x < min.x || max.y < min.y {
            bail!("Rect::try_from_min_max(): max {max} is less than min {min}");
        }
        Ok(Self::from_min_max(min, max))
    }
    /// Creates an empty rectangle with zero size at the origin.
    pub fn empty() -> Self {
        Self {
            pos: Vec2::zero(),
            size: Vec2::zero(),
        }
    }

    /// Returns the smallest rectangle containing every rectangle in `rects`, or `None` if there
    /// are none.
    pub fn bounding(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
        rects.into_iter().reduce(|acc, rect| acc.expand(&rect))
    }

    #[must_use]
    pub fn with_pos(mut self, pos: Vec2) -> Rect {
        self.pos = pos;
        self
    }
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Rect {
        self.size = size;
        self
    }

    /// Clamps the edges of the rectangle to fit within `bound`.
    ///
    /// The top-left corner and the bottom-right corner are clamped independently, so a
    /// rectangle lying entirely outside `bound` on some axis ends up with a zero or negative
    /// size on that axis. That size is kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let bound = Rect::new(Vec2::zero(), Vec2 { x: 10.0, y: 10.0 });
    /// let rect = Rect::new(Vec2 { x: -5.0, y: 5.0 }, Vec2 { x: 10.0, y: 10.0 });
    /// let clamped = rect.clamp(&bound);
    /// assert_eq!(clamped.pos(), Vec2 { x: 0.0, y: 5.0 });
    /// assert_eq!(clamped.size(), Vec2 { x: 5.0, y: 5.0 });
    /// ```
    #[must_use]
    pub fn clamp(&self, bound: &Rect) -> Rect {
        let pos = Vec2 {
            x: gg_float::clamp_auto(self.left(), bound.left(), bound.right()),
            y: gg_float::clamp_auto(self.top(), bound.top(), bound.bottom()),
        };
        let far = Vec2 {
            x: gg_float::clamp(self.right(), bound.left(), bound.right()),
            y: gg_float::clamp(self.bottom(), bound.top(), bound.bottom()),
        };
        Rect::new(pos, far - pos)
    }

    /// Moves the rectangle, keeping its size, so that it fits within `bound`.
    ///
    /// If the rectangle is larger than `bound` on an axis, its position on that axis is clamped
    /// between `bound`'s near edge and `bound`'s far edge minus the size, in whichever order
    /// those come.
    #[must_use]
    pub fn nudge(&self, bound: &Rect) -> Rect {
        let max_pos = bound.bottom_right() - self.size;
        let pos = Vec2 {
            x: gg_float::clamp_auto(self.left(), bound.left(), max_pos.x),
            y: gg_float::clamp_auto(self.top(), bound.top(), max_pos.y),
        };
        Rect::new(pos, self.size)
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn expand(&self, other: &Rect) -> Rect {
        let top_left = self.top_left().min(other.top_left());
        let bottom_right = self.bottom_right().max(other.bottom_right());
        Self::from_min_max(top_left, bottom_right)
    }

    /// Returns a rectangle of the same size positioned at the origin.
    #[must_use]
    pub fn zero_pos(&self) -> Rect {
        Rect::new(Vec2::zero(), self.size)
    }
}

impl AxisAlignedExtent for Rect {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> Vec2 {
        self.size
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rect(pos=")?;
        fmt::Display::fmt(&self.pos, f)?;
        write!(f, ", size=")?;
        fmt::Display::fmt(&self.size, f)?;
        write!(f, ")")
    }
}
