// CLASSIFICATION: COMMUNITY
// Filename: strip_location.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

use crate::ir::{Context, Module};
use crate::pass_framework::{Pass, PassError};

/// Attribute carrying source location information.
pub const LOCATION_ATTR: &str = "loc";

/// Removes the `loc` attribute from every operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripLocation;

impl Pass for StripLocation {
    fn description(&self) -> &str {
        "drop `loc` attributes from every operation"
    }

    fn run(&self, _ctx: &Context, module: &mut Module) -> Result<(), PassError> {
        module.try_walk_mut(&mut |op| {
            op.remove_attr(LOCATION_ATTR);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Operation;

    #[test]
    fn removes_nested_locations_only() {
        let mut module = Module::new().with_op(
            Operation::new("toy.add")
                .with_attr(LOCATION_ATTR, "a.toy:1")
                .with_child(
                    Operation::new("toy.lit")
                        .with_attr(LOCATION_ATTR, "a.toy:2")
                        .with_attr("value", 3i64),
                ),
        );
        StripLocation.run(&Context::new(), &mut module).unwrap();
        let mut locs = 0;
        module.walk(&mut |op| locs += op.attributes.contains_key(LOCATION_ATTR) as usize);
        assert_eq!(locs, 0);
        assert_eq!(module.ops[0].region[0].attr("value").and_then(|a| a.as_int()), Some(3));
    }
}
