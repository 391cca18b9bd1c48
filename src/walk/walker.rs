// Wed Feb 11 2026 - Alex

use crate::error::ExtractError;
use crate::model::{AggregateId, BitOffset, TypeArena, TypeRef};
use crate::output::Emitter;
use crate::walk::{AttributeMatcher, PathBuilder, Registry};
use std::io::Write;

/// Depth-first traversal over the type arena. One walker exists per run; it
/// owns the path arena and the registry, and borrows the emitter so the
/// caller can read back the record count afterwards.
pub struct Walker<'a, W: Write> {
    arena: &'a TypeArena,
    matcher: AttributeMatcher,
    path: PathBuilder,
    registry: Registry,
    emitter: &'a mut Emitter<W>,
}

impl<'a, W: Write> Walker<'a, W> {
    pub fn new(
        arena: &'a TypeArena,
        matcher: AttributeMatcher,
        path: PathBuilder,
        emitter: &'a mut Emitter<W>,
    ) -> Self {
        Self {
            arena,
            matcher,
            path,
            registry: Registry::new(),
            emitter,
        }
    }

    /// Entry point for one "definition complete" event. Anonymous top-level
    /// aggregates are skipped here; their fields surface when an enclosing
    /// named aggregate flattens them.
    pub fn type_completed(&mut self, id: AggregateId) -> Result<(), ExtractError> {
        if self.arena.get(id).is_anonymous() {
            log::debug!("skipping anonymous top-level aggregate #{}", id.index());
            return Ok(());
        }
        self.visit(id, BitOffset::zero())
    }

    fn visit(&mut self, id: AggregateId, base: BitOffset) -> Result<(), ExtractError> {
        if self.registry.contains(id) {
            return Ok(());
        }
        let aggregate = self.arena.get(id);

        let aggregate_marker = match aggregate.name() {
            Some(name) => Some(self.path.push(name)?),
            None => None,
        };

        for field in aggregate.fields() {
            if field.is_artificial() {
                continue;
            }

            let field_offset = base.offset_by(field.offset());

            let field_marker = match field.name() {
                Some(name) => Some(self.path.push(name)?),
                None => None,
            };

            if self.matcher.matches(field) {
                if field_marker.is_none() {
                    return Err(ExtractError::UnnamedExport {
                        path: self.path.as_str().to_string(),
                    });
                }
                self.emitter.emit(&self.path, field_offset)?;
            }

            // Anonymous nested aggregates flatten into the current
            // namespace at the field's accumulated offset. Named ones get
            // their own completion event and start their own path.
            if let TypeRef::Aggregate(child) = field.type_ref() {
                if self.arena.get(*child).is_anonymous() {
                    self.visit(*child, field_offset)?;
                }
            }

            if let Some(marker) = field_marker {
                self.path.pop(marker);
            }
        }

        if let Some(marker) = aggregate_marker {
            self.path.pop(marker);
        }
        self.registry.insert(id);
        Ok(())
    }
}
