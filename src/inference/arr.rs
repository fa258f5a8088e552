use crate::ir::Schema;
use crate::value::Value;

/// Items schema for a sequence.
///
/// Sequences are treated as homogeneous: only `xs[0]` is looked at. An empty
/// sequence, or one whose first element is blank, yields [`Schema::Any`].
pub fn classify_items(xs: &[Value]) -> Schema {
    // A `""` head counts as blank here too, same as an object field. Older
    // generators typed `["", "a"]` as string items; this one gives `{}`.
    xs.first()
        .and_then(super::classify)
        .unwrap_or(Schema::Any)
}
