mod linalg_tests {
    use cse_rs::linalg::*;

    #[test]
    fn cross_product_is_orthogonal() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        let c = cross(a, b);
        assert!(dot(a, c).abs() < 1e-12);
        assert!(dot(b, c).abs() < 1e-12);
    }

    #[test]
    fn cross4_is_orthogonal_to_all_three() {
        let u = vec4(1.0, 2.0, 3.0, 4.0);
        let v = vec4(0.0, 1.0, -1.0, 2.0);
        let t = vec4(5.0, 0.0, 2.0, 1.0);
        let w = cross4(u, v, t);
        assert!(dot(u, w).abs() < 1e-10);
        assert!(dot(v, w).abs() < 1e-10);
        assert!(dot(t, w).abs() < 1e-10);
    }

    #[test]
    fn vector_arithmetic_and_norms() {
        let v = vec3(3.0, 0.0, 4.0);
        assert_eq!(v + v, Vector([6.0, 0.0, 8.0]));
        assert_eq!(v * 0.5, Vector([1.5, 0.0, 2.0]));
        assert_eq!(euclidean_norm(v), 5.0);
        assert_eq!(abs_norm(v), 7.0);
        assert_eq!(uniform_norm(-v), 4.0);
        let n = normalize(v);
        assert!((euclidean_norm(n) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn determinant_of_known_matrices() {
        assert_eq!(Mat3::identity().determinant(), 1.0);
        let m = Matrix::from_columns([
            vec3(2.0, 0.0, 0.0),
            vec3(0.0, 3.0, 0.0),
            vec3(0.0, 0.0, 4.0),
        ]);
        assert_eq!(m.determinant(), 24.0);
        // Singular: two equal columns.
        let s = Matrix::from_columns([
            vec3(1.0, 2.0, 3.0),
            vec3(1.0, 2.0, 3.0),
            vec3(0.0, 1.0, 0.0),
        ]);
        assert_eq!(s.determinant(), 0.0);
    }

    #[test]
    fn inverse_round_trip_and_singular_rejection() {
        let m = Matrix::from_columns([
            vec3(3.0, 0.0, 2.0),
            vec3(2.0, 0.0, -2.0),
            vec3(0.0, 1.0, 1.0),
        ]);
        let inv = m.inverse().unwrap();
        let prod = m * inv;
        for c in 0..3 {
            for r in 0..3 {
                let expect = if c == r { 1.0 } else { 0.0 };
                assert!((prod[(c, r)] - expect).abs() < 1e-12);
            }
        }
        assert!(Matrix::from_columns([vec2(1.0, 2.0), vec2(2.0, 4.0)])
            .inverse()
            .is_err());
    }

    #[test]
    fn matrix_vector_product() {
        let m = Matrix::from_columns([vec2(1.0, 3.0), vec2(2.0, 4.0)]);
        assert_eq!(m * vec2(1.0, 1.0), vec2(3.0, 7.0));
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 2.0);
    }

    #[test]
    fn dynamic_row_and_column_edits() {
        let mut m = DynamicMatrix::from_rows(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        m.add_row(2, &[5.0, 6.0]);
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.get_row(2), vec![5.0, 6.0]);
        m.add_column(1, &[7.0, 8.0, 9.0]);
        assert_eq!(m.size(), (3, 3));
        assert_eq!(m.get_column(1), vec![7.0, 8.0, 9.0]);
        m.delete_row(0);
        assert_eq!(m.get_row(0), vec![3.0, 8.0, 4.0]);
        m.delete_column(1);
        assert_eq!(m.get_row(0), vec![3.0, 4.0]);
    }

    #[test]
    fn dynamic_multiplication_matches_hand_result() {
        let a = DynamicMatrix::from_rows(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let b = DynamicMatrix::from_rows(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let c = &a * &b;
        assert_eq!(c.get_row(0), vec![19.0, 22.0]);
        assert_eq!(c.get_row(1), vec![43.0, 50.0]);
        assert!(a.checked_mul(&DynamicMatrix::new(2, 3)).is_err());
    }

    #[test]
    fn dynamic_resize_preserves_overlap() {
        let mut m = DynamicMatrix::from_rows(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        m.resize((3, 3));
        assert_eq!(m.at(0, 0), 1.0);
        assert_eq!(m.at(1, 1), 4.0);
        assert_eq!(m.at(2, 2), 0.0);
        m.resize((1, 1));
        assert_eq!(m.at(0, 0), 1.0);
    }
}
