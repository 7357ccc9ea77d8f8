//! Structural cloning — fully independent copies of [`Value`] trees.
//!
//! Two formulations with identical results:
//!
//! - [`Value::clone`] — the recursive formulation. Call-stack depth equals
//!   the nesting depth of the input, so a pathologically deep value
//!   (buildable only programmatically; parsed input is depth-limited by
//!   serde_json) can exhaust the stack. That ceiling is a documented
//!   boundary condition of this path, not a defect.
//! - [`Value::deep_clone_iterative`] — an explicit frame stack on the
//!   heap replaces call-stack recursion. Use it when nesting depth is
//!   untrusted.
//!
//! Either way the copy shares no container with its source at any depth:
//! sequences and mappings are freshly allocated, element order and key
//! order are preserved exactly, and scalars are copied by value. Mutating
//! one side never affects the other.

use crate::value::Value;

impl Clone for Value {
    /// Recursive structural clone.
    ///
    /// Written as an explicit match over the closed union rather than
    /// derived, so the dispatch and the recursion boundary are visible at
    /// the definition site. Sequences clone element-wise in order;
    /// mappings clone pair-wise in insertion order with keys preserved
    /// exactly; scalars are copied by value.
    fn clone(&self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Integer(n) => Value::Integer(*n),
            Value::Float(f) => Value::Float(*f),
            Value::String(s) => Value::String(s.clone()),
            Value::Sequence(items) => Value::Sequence(items.iter().map(Value::clone).collect()),
            Value::Mapping(entries) => Value::Mapping(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.clone()))
                    .collect(),
            ),
        }
    }
}

/// One partially built container during an iterative clone. `iter` walks
/// the source container; `out` accumulates the copy. A mapping frame
/// stashes the current key in `slot` while its value is being cloned.
enum Frame<'a> {
    Sequence {
        iter: std::slice::Iter<'a, Value>,
        out: Vec<Value>,
    },
    Mapping {
        iter: std::slice::Iter<'a, (String, Value)>,
        slot: Option<String>,
        out: Vec<(String, Value)>,
    },
}

impl<'a> Frame<'a> {
    /// Open a frame for a container, or copy a scalar outright (`Err`).
    fn open(value: &'a Value) -> Result<Frame<'a>, Value> {
        match value {
            Value::Sequence(items) => Ok(Frame::Sequence {
                iter: items.iter(),
                out: Vec::with_capacity(items.len()),
            }),
            Value::Mapping(entries) => Ok(Frame::Mapping {
                iter: entries.iter(),
                slot: None,
                out: Vec::with_capacity(entries.len()),
            }),
            Value::Null => Err(Value::Null),
            Value::Bool(b) => Err(Value::Bool(*b)),
            Value::Integer(n) => Err(Value::Integer(*n)),
            Value::Float(f) => Err(Value::Float(*f)),
            Value::String(s) => Err(Value::String(s.clone())),
        }
    }

    /// Next source child to clone, or `None` when the container is done.
    /// For mappings this also records the child's key in `slot`.
    fn advance(&mut self) -> Option<&'a Value> {
        match self {
            Frame::Sequence { iter, .. } => iter.next(),
            Frame::Mapping { iter, slot, .. } => iter.next().map(|(key, child)| {
                *slot = Some(key.clone());
                child
            }),
        }
    }

    /// Append a finished child copy to this container.
    fn attach(&mut self, value: Value) {
        match self {
            Frame::Sequence { out, .. } => out.push(value),
            Frame::Mapping { slot, out, .. } => {
                if let Some(key) = slot.take() {
                    out.push((key, value));
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Sequence { out, .. } => Value::Sequence(out),
            Frame::Mapping { out, .. } => Value::Mapping(out),
        }
    }
}

impl Value {
    /// Structural clone with an explicit frame stack instead of recursion.
    ///
    /// Produces exactly the same result as [`Value::clone`] for every
    /// input, but clone depth is bounded by heap rather than call stack,
    /// so arbitrarily deep values are safe to copy. Note the scope of
    /// that guarantee: comparing or dropping such a value still walks it
    /// with ordinary recursion (derived `PartialEq`, drop glue), so the
    /// stack ceiling is lifted for the clone path specifically.
    pub fn deep_clone_iterative(&self) -> Value {
        let mut stack = match Frame::open(self) {
            Ok(frame) => vec![frame],
            Err(scalar) => return scalar,
        };
        loop {
            match stack.last_mut().and_then(Frame::advance) {
                Some(child) => match Frame::open(child) {
                    Ok(frame) => stack.push(frame),
                    Err(scalar) => {
                        if let Some(top) = stack.last_mut() {
                            top.attach(scalar);
                        }
                    }
                },
                None => {
                    // Top container exhausted: seal it and hand it to its
                    // parent, or return it if it was the root.
                    match stack.pop() {
                        Some(frame) => {
                            let done = frame.finish();
                            match stack.last_mut() {
                                Some(parent) => parent.attach(done),
                                None => return done,
                            }
                        }
                        // The root frame returns above before the stack
                        // can empty; this arm is never taken.
                        None => return Value::Null,
                    }
                }
            }
        }
    }
}
