// CLASSIFICATION: COMMUNITY
// Filename: pass_registry.rs v2.0
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Standard pass tables for choco-opt.

use std::sync::Arc;

use super::{DeadCode, DoubleLiteral, FoldConstants, Nop, StripLocation, Verify};
use crate::pass_framework::{Pass, PassRegistry, RegistryError};

/// Framework-native passes, in listing order.
pub fn native_passes() -> Vec<Arc<dyn Pass>> {
    vec![Arc::new(Nop::new()), Arc::new(StripLocation), Arc::new(Verify)]
}

/// Toy-language passes, in listing order.
pub fn integrated_passes() -> Vec<Arc<dyn Pass>> {
    vec![
        Arc::new(DoubleLiteral),
        Arc::new(FoldConstants::new()),
        Arc::new(DeadCode::new()),
    ]
}

/// Registry holding every built-in pass.
pub fn standard_registry() -> Result<PassRegistry, RegistryError> {
    PassRegistry::build(native_passes(), integrated_passes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass_framework::PassFilter;

    #[test]
    fn standard_listing_is_stable() {
        let reg = standard_registry().unwrap();
        assert_eq!(
            reg.names(PassFilter::All).collect::<Vec<_>>(),
            vec![
                "nop",
                "strip-location",
                "verify",
                "double-literal",
                "fold-constants",
                "dead-code"
            ]
        );
        assert_eq!(
            reg.names(PassFilter::Integrated).collect::<Vec<_>>(),
            vec!["double-literal", "fold-constants", "dead-code"]
        );
    }
}
