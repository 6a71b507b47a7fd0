use voxbrick_geom::{Aabb, Mat3, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_sub() {
    let a = Vec3::new(30.0, -72.0, 10.0);
    let b = Vec3::new(-10.0, 24.0, 20.0);
    assert!(vec3_approx_eq(a - b, Vec3::new(40.0, -96.0, -10.0), 1e-6));
    assert!(vec3_approx_eq(a - a, Vec3::new(0.0, 0.0, 0.0), 1e-6));
}

#[test]
fn vec3_componentwise_min_max() {
    let a = Vec3::new(1.0, -5.0, 3.0);
    let b = Vec3::new(-2.0, 4.0, 3.0);
    assert_eq!(a.min(b), Vec3::new(-2.0, -5.0, 3.0));
    assert_eq!(a.max(b), Vec3::new(1.0, 4.0, 3.0));
}

#[test]
fn aabb_from_points_covers_inputs() {
    let pts = [
        Vec3::new(-40.0, 0.0, -30.0),
        Vec3::new(30.0, -48.0, 10.0),
        Vec3::new(0.0, -24.0, 50.0),
    ];
    let b = Aabb::from_points(pts).unwrap();
    assert_eq!(b.min, Vec3::new(-40.0, -48.0, -30.0));
    assert_eq!(b.max, Vec3::new(30.0, 0.0, 50.0));
    assert!(vec3_approx_eq(b.extents(), Vec3::new(70.0, 48.0, 80.0), 1e-6));
    for p in pts {
        assert!(b.contains(p));
    }
}

#[test]
fn aabb_from_no_points_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn aabb_include_and_point() {
    let a = Aabb::point(Vec3::new(0.0, 0.0, 0.0));
    let u = a.include(Vec3::new(20.0, -24.0, 6.0));
    assert_eq!(u.min, Vec3::new(0.0, -24.0, 0.0));
    assert_eq!(u.max, Vec3::new(20.0, 0.0, 6.0));
    assert_eq!(u, Aabb::new(u.min, u.max));
    assert!(!a.contains(Vec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn mat3_identity_default() {
    assert!(Mat3::default().is_identity());
    assert_eq!(Mat3::IDENTITY.m, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    let r = Mat3 {
        m: [0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0],
    };
    assert!(!r.is_identity());
}
