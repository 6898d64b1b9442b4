pub type NodeId = u32;
pub type Weight = f64;
pub type ComponentId = usize;

pub const INFINITY: Weight = f64::INFINITY;

pub type NodeIds = Vec<NodeId>;
pub type Weights = Vec<Weight>;
pub type Arclist = [(NodeId, Weight)];
