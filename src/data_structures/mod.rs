pub mod compare;
pub mod priority_heap;
pub mod top_k;

pub use compare::{Compare, KeyOrder, MaxOrder, MinOrder, Reversed};
pub use priority_heap::PriorityHeap;
pub use top_k::TopK;
