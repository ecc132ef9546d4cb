/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// A value that can be stored in a [`VertexContainer`](crate::container::VertexContainer).
///
/// The container treats vertices as opaque copyable values. The only behavior
/// it needs is a zero point, used to seed the first element appended through
/// the list editor.
pub trait Vertex: Copy {
    /// Returns the zero point.
    fn origin() -> Self;
}

macro_rules! impl_vertex_for_points {
    ($($t:ty),*) => {
        $(
            impl Vertex for nalgebra::Point2<$t> {
                fn origin() -> Self {
                    nalgebra::Point2::origin()
                }
            }

            impl Vertex for nalgebra::Point3<$t> {
                fn origin() -> Self {
                    nalgebra::Point3::origin()
                }
            }

            impl Vertex for [$t; 2] {
                fn origin() -> Self {
                    [0.0; 2]
                }
            }

            impl Vertex for [$t; 3] {
                fn origin() -> Self {
                    [0.0; 3]
                }
            }
        )*
    };
}

impl_vertex_for_points!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nalgebra_origin_is_zero() {
        assert_eq!(<Point2 as Vertex>::origin(), Point2::new(0.0, 0.0));
        assert_eq!(<Point3 as Vertex>::origin(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(
            <nalgebra::Point3<f32> as Vertex>::origin(),
            nalgebra::Point3::new(0.0_f32, 0.0, 0.0)
        );
    }

    #[test]
    fn array_origin_is_zero() {
        assert_eq!(<[f64; 2] as Vertex>::origin(), [0.0, 0.0]);
        assert_eq!(<[f32; 3] as Vertex>::origin(), [0.0, 0.0, 0.0]);
    }
}
