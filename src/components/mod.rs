//! Headless view building blocks: nodes, templates, channels, keyed lists
//! and nav lists.

pub mod channel;
pub mod keyed_list;
pub mod nav;
pub mod node;
pub mod registry;

pub use channel::{Channel, SubscriptionId};
pub use keyed_list::{KeyedList, Reconciled};
pub use nav::{NavEvent, NavList, Selection};
pub use node::{CLICK, Node, NodeId, Renderable};
pub use registry::{ComponentRegistry, Template};
