use super::{
    axis::CoordinateAxis, point::Point, range::Range, resolution::Resolution, tile::TileRequest,
};

/// How many servers a cycle starting at `col` can actually use: the
/// nominal pool size, capped by the whole tiles left in the row-band.
/// Pure in (col, num_x, dim, nominal) so the uneven-division edge case
/// is testable without any scan state.
pub fn effective_servers(col: usize, num_x: usize, dim: usize, nominal: usize) -> usize {
    nominal.min((num_x - col) / dim)
}

/// One dispatch cycle, computed up front: the servers used this cycle
/// and their coordinate-bound requests in server-index order. The
/// request order is what the merge step keys its column offsets on.
#[derive(Debug, Clone)]
pub struct CyclePlan {
    pub row: usize,
    pub col: usize,
    pub dim: usize,
    pub servers_used: usize,
    pub requests: Vec<TileRequest>,
}

impl CyclePlan {
    pub fn build(
        x_axis: &CoordinateAxis,
        y_axis: &CoordinateAxis,
        row: usize,
        col: usize,
        dim: usize,
        servers: &[String],
        max_iterations: u32,
    ) -> Self {
        let servers_used = effective_servers(col, x_axis.len(), dim, servers.len());

        // The whole row-band shares its y-bounds.
        let y_min = y_axis[row];
        let y_max = y_axis[row + dim - 1];

        let mut requests = Vec::with_capacity(servers_used);
        for s in 0..servers_used {
            let x_min = x_axis[col + s * dim];
            let x_max = x_axis[col + (s + 1) * dim - 1];
            requests.push(TileRequest::new(
                servers[s].clone(),
                Range::new(Point::new(x_min, y_min), Point::new(x_max, y_max)),
                Resolution::new(dim, dim),
                max_iterations,
            ));
        }

        Self {
            row,
            col,
            dim,
            servers_used,
            requests,
        }
    }

    /// Column where the next cycle in this row-band starts.
    pub fn next_col(&self) -> usize {
        self.col + self.servers_used * self.dim
    }
}
