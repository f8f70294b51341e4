pub mod gen;

#[derive(Clone, Copy)]
pub struct Input {
    pub name: &'static str,
    pub vertex_count: u32,
    pub edge_count: usize,
}

pub const SMALL: Input = Input {
    name: "small",
    vertex_count: 100,
    edge_count: 1_000,
};

pub const MEDIUM: Input = Input {
    name: "medium",
    vertex_count: 1_000,
    edge_count: 10_000,
};

pub const LARGE: Input = Input {
    name: "large",
    vertex_count: 10_000,
    edge_count: 100_000,
};
