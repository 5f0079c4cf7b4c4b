/// Solve the square system `a · x = b` by Gaussian elimination with
/// partial pivoting. Returns `None` when a pivot falls below
/// `PIVOT_TOLERANCE`, i.e. the system is singular for our purposes, or
/// when the solution overflows.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    assert!(a.len() == n, "row count differs from right-hand side");
    assert!(a.iter().all(|row| row.len() == n), "system is not square");
    for col in 0..n {
        let pivot = (col..n).max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))?;
        if a[pivot][col].abs() < crate::PIVOT_TOLERANCE {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0. {
                continue;
            }
            for k in col..n {
                let delta = factor * a[col][k];
                a[row][k] -= delta;
            }
            let delta = factor * b[col];
            b[row] -= delta;
        }
    }
    let mut x = vec![0.; n];
    for row in (0..n).rev() {
        let tail = (row + 1..n).map(|k| a[row][k] * x[k]).sum::<f64>();
        x[row] = (b[row] - tail) / a[row][row];
    }
    x.iter().all(|v| v.is_finite()).then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(x: &[f64], y: &[f64]) -> bool {
        x.len() == y.len() && x.iter().zip(y).all(|(a, b)| (a - b).abs() < 1e-12)
    }

    #[test]
    fn identity() {
        let a = vec![vec![1., 0.], vec![0., 1.]];
        assert_eq!(solve(a, vec![3., -4.]), Some(vec![3., -4.]));
    }

    #[test]
    fn pivoting() {
        // leading zero forces a row swap
        let a = vec![vec![0., 2., 1.], vec![1., 1., 1.], vec![2., 1., 0.]];
        let x = solve(a, vec![5., 4., 4.]).unwrap();
        assert!(close(&x, &[1., 2., 1.]));
    }

    #[test]
    fn singular() {
        let a = vec![vec![1., 2.], vec![2., 4.]];
        assert_eq!(solve(a, vec![1., 2.]), None);
    }

    #[test]
    fn indifference() {
        // q over two columns making both rows of matching pennies indifferent
        let a = vec![vec![1., -1., -1.], vec![-1., 1., -1.], vec![1., 1., 0.]];
        let x = solve(a, vec![0., 0., 1.]).unwrap();
        assert!(close(&x, &[0.5, 0.5, 0.]));
    }

    #[test]
    fn overflow() {
        // pivot clears the tolerance but the quotient does not fit in f64
        let a = vec![vec![1e-11, 0.], vec![0., 1.]];
        assert_eq!(solve(a, vec![1e300, 1.]), None);
    }

    #[test]
    fn empty() {
        assert_eq!(solve(vec![], vec![]), Some(vec![]));
    }
}
