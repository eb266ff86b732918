//! Parser layer tests
//!
//! Structural extraction through the public scan entry points:
//! - Module headers and ports
//! - Instances and bindings
//! - Keyword filtering
