use super::*;
use crate::cfg::VecCfg;
use nalgebra::{Rotation2, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: Vector, b: Vector) -> bool {
    a.approx_eq_eps(&b, VecCfg::default().eps_eq)
}

#[test]
fn construct_defaults_to_origin() {
    assert_eq!(Vector::default(), Vector::new(0.0, 0.0));
    assert_eq!(Vector::ZERO, Vector::default());
    assert_eq!(Vector::from((1.5, -2.0)), Vector::new(1.5, -2.0));
    assert_eq!(Vector::from([3.0, 4.0]), Vector::new(3.0, 4.0));
    let arr: [f64; 2] = Vector::new(7.0, 8.0).into();
    assert_eq!(arr, [7.0, 8.0]);
}

#[test]
fn length_of_three_four_is_five() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v.len2(), 25.0);
    assert_eq!(v.len(), 5.0);
}

#[test]
fn perp_reads_original_x() {
    let mut v = Vector::new(1.0, 2.0);
    v.perp();
    assert_eq!(v, Vector::new(2.0, -1.0));
}

#[test]
fn rotate_quarter_turn_uses_original_components() {
    let mut v = Vector::new(1.0, 0.0);
    v.rotate(FRAC_PI_2);
    assert!(close(v, Vector::new(0.0, 1.0)), "got {v}");

    // a y-update that read the rotated x would land away from (-2, 1)
    let mut w = Vector::new(1.0, 2.0);
    w.rotate(FRAC_PI_2);
    assert!(close(w, Vector::new(-2.0, 1.0)), "got {w}");
}

#[test]
fn rotate_matches_nalgebra_rotation() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let v = Vector::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let th = rng.gen_range(-PI..PI);
        let expected: Vector = (Rotation2::new(th) * Vector2::from(v)).into();
        assert!(close(v.rotated(th), expected));
    }
}

#[test]
fn reverse_negates_both() {
    let mut v = Vector::new(1.0, -2.0);
    v.reverse();
    assert_eq!(v, Vector::new(-1.0, 2.0));
}

#[test]
fn normalize_zero_is_noop() {
    let mut v = Vector::new(0.0, 0.0);
    v.normalize();
    assert_eq!(v, Vector::ZERO);
}

#[test]
fn normalize_gives_unit_length() {
    let mut v = Vector::new(3.0, 4.0);
    v.normalize();
    assert!(close(v, Vector::new(0.6, 0.8)));
    assert!(v.is_unit_eps(VecCfg::default().eps_unit));
}

#[test]
fn add_sub_leave_operand_untouched() {
    let other = Vector::new(3.0, 4.0);
    let mut v = Vector::new(1.0, 2.0);
    v.add(&other);
    assert_eq!(v, Vector::new(4.0, 6.0));
    v.sub(&other).sub(&other);
    assert_eq!(v, Vector::new(-2.0, -2.0));
    assert_eq!(other, Vector::new(3.0, 4.0));
}

#[test]
fn scale_uniform_and_per_axis() {
    let mut v = Vector::new(2.0, 0.0);
    v.scale(3.0, None);
    assert_eq!(v, Vector::new(6.0, 0.0));

    let mut w = Vector::new(2.0, 3.0);
    w.scale(2.0, 5.0);
    assert_eq!(w, Vector::new(4.0, 15.0));

    // explicit zero is not the same as unset
    let mut z = Vector::new(2.0, 3.0);
    z.scale(2.0, Some(0.0));
    assert_eq!(z, Vector::new(4.0, 0.0));
}

#[test]
fn project_onto_non_unit_axis() {
    let mut v = Vector::new(4.0, 0.0);
    v.project(&Vector::new(1.0, 1.0));
    assert!(close(v, Vector::new(2.0, 2.0)));
}

#[test]
fn project_n_onto_unit_axis() {
    let mut v = Vector::new(4.0, 3.0);
    v.project_n(&Vector::new(1.0, 0.0));
    assert_eq!(v, Vector::new(4.0, 0.0));

    let axis = Vector::new(1.0, 1.0).normalized();
    let a = Vector::new(4.0, 0.0).projected(&Vector::new(1.0, 1.0));
    let mut b = Vector::new(4.0, 0.0);
    b.project_n(&axis);
    assert!(close(a, b));
}

#[test]
fn project_on_zero_axis_is_non_finite() {
    let mut v = Vector::new(1.0, 2.0);
    v.project(&Vector::ZERO);
    assert!(!v.is_finite());
}

#[test]
fn try_project_rejects_degenerate_axis() {
    let mut v = Vector::new(1.0, 2.0);
    assert!(v.try_project(&Vector::ZERO).is_none());
    assert!(v.try_project(&Vector::new(f64::INFINITY, 0.0)).is_none());
    assert_eq!(v, Vector::new(1.0, 2.0));
    assert!(v.try_reflect(&Vector::ZERO).is_none());
    assert_eq!(v, Vector::new(1.0, 2.0));

    let got = *v.try_project(&Vector::new(0.0, 3.0)).unwrap();
    assert!(close(got, Vector::new(0.0, 2.0)));
}

#[test]
fn reflect_across_axes() {
    // across the x-axis flips y
    let mut v = Vector::new(2.0, 3.0);
    v.reflect(&Vector::new(5.0, 0.0));
    assert!(close(v, Vector::new(2.0, -3.0)));

    // across the diagonal swaps components
    let mut w = Vector::new(2.0, 3.0);
    w.reflect(&Vector::new(1.0, 1.0));
    assert!(close(w, Vector::new(3.0, 2.0)));

    let mut u = Vector::new(2.0, 3.0);
    u.reflect_n(&Vector::new(0.0, 1.0));
    assert!(close(u, Vector::new(-2.0, 3.0)));

    let mut t = Vector::new(2.0, 3.0);
    t.try_reflect(&Vector::new(1.0, 1.0)).unwrap().scale(2.0, None);
    assert!(close(t, Vector::new(6.0, 4.0)));
}

#[test]
fn chaining_applies_left_to_right() {
    let mut v = Vector::new(1.0, 0.0);
    v.scale(2.0, None)
        .rotate(FRAC_PI_2)
        .add(&Vector::new(1.0, 1.0))
        .reverse();
    assert!(close(v, Vector::new(-1.0, -3.0)));
}

#[test]
fn operators_match_in_place_ops() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, 4.0);
    let mut c = a;
    c.add(&b);
    assert_eq!(a + b, c);
    assert_eq!(a - b, Vector::new(-2.0, -2.0));
    assert_eq!(-a, a.reversed());
    assert_eq!(a * 2.0, 2.0 * a);
    let mut d = a;
    d += b;
    d -= a;
    d *= 0.5;
    assert_eq!(d, Vector::new(1.5, 2.0));
}

#[test]
fn value_forms_do_not_touch_source() {
    let v = Vector::new(1.0, 2.0);
    let _ = v.perped();
    let _ = v.rotated(1.0);
    let _ = v.reflected(&Vector::new(1.0, 0.0));
    assert_eq!(v, Vector::new(1.0, 2.0));
}

#[test]
fn display_and_nalgebra_interop() {
    assert_eq!(Vector::new(1.5, -2.0).to_string(), "(1.5, -2)");
    let n: Vector2<f64> = Vector::new(1.0, 2.0).into();
    assert_eq!(n, Vector2::new(1.0, 2.0));
    assert_eq!(Vector::from(n).dot(&Vector::new(1.0, 1.0)), 3.0);
}

#[test]
fn tolerance_helpers() {
    assert!(Vector::new(1e-12, -1e-12).is_zero_eps(1e-9));
    assert!(!Vector::new(1e-3, 0.0).is_zero_eps(1e-9));
    assert!(Vector::from_angle(0.7).is_unit_eps(1e-12));
}

fn coord() -> impl Strategy<Value = f64> {
    -1e3f64..1e3
}

proptest! {
    #[test]
    fn len2_is_sum_of_squares(x in coord(), y in coord()) {
        let v = Vector::new(x, y);
        prop_assert_eq!(v.len2(), x * x + y * y);
        prop_assert!(v.len() >= 0.0);
        prop_assert_eq!(v.len(), v.len2().sqrt());
    }

    #[test]
    fn reverse_twice_is_identity(x in coord(), y in coord()) {
        let v = Vector::new(x, y);
        let mut w = v;
        w.reverse().reverse();
        prop_assert_eq!(w, v);
    }

    #[test]
    fn normalize_nonzero_is_unit(x in coord(), y in coord()) {
        let v = Vector::new(x, y);
        prop_assume!(v.len() > 1e-6);
        prop_assert!(v.normalized().is_unit_eps(1e-12));
    }

    #[test]
    fn perp_four_times_is_identity(x in coord(), y in coord()) {
        let v = Vector::new(x, y);
        let mut w = v;
        w.perp().perp().perp().perp();
        prop_assert_eq!(w, v);
    }

    #[test]
    fn rotate_then_unrotate(x in coord(), y in coord(), th in -10.0f64..10.0) {
        let v = Vector::new(x, y);
        let mut w = v;
        w.rotate(th).rotate(-th);
        prop_assert!(w.approx_eq_eps(&v, 1e-9 * (1.0 + v.len())));
        prop_assert!((v.rotated(th).len() - v.len()).abs() <= 1e-9 * (1.0 + v.len()));
    }

    #[test]
    fn dot_is_commutative(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Vector::new(ax, ay);
        let b = Vector::new(bx, by);
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn reflect_preserves_length(x in coord(), y in coord(), th in -PI..PI) {
        let v = Vector::new(x, y);
        let axis = Vector::from_angle(th);
        let r = v.reflected(&axis);
        prop_assert!((r.len() - v.len()).abs() <= 1e-9 * (1.0 + v.len()));
        let mut rn = v;
        rn.reflect_n(&axis);
        prop_assert!(rn.approx_eq_eps(&r, 1e-9 * (1.0 + v.len())));
    }
}
