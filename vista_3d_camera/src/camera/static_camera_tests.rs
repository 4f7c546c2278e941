use glam::Mat4;
use super::*;

#[test]
fn test_view_matrix_is_identity() {
    let camera = StaticCamera::new();
    assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_default_equals_new() {
    let camera = StaticCamera::default();
    assert_eq!(*camera.view_matrix(), *StaticCamera::new().view_matrix());
}

#[test]
fn test_clone() {
    let camera = StaticCamera::new();
    let cloned = camera.clone();
    assert_eq!(*cloned.view_matrix(), Mat4::IDENTITY);
}
