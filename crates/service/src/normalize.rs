//! Identifier normalization.
//!
//! Store documents carry `ObjectId` values that have no plain JSON form.
//! `normalize` rewrites every one of them to its hex string, anywhere in a
//! nested document/array tree, and leaves every other value untouched.
//! The walk keeps its own stack on the heap so input depth is not limited
//! by the thread stack.

use mongodb::bson::{self, Bson, Document};
use serde_json::Value;

enum Node {
    Document { pending: bson::document::IntoIter, done: Document },
    Array { pending: std::vec::IntoIter<Bson>, done: Vec<Bson> },
}

/// A container being rebuilt plus the key it will take in its parent
/// document (`None` under an array or at the root).
struct Frame {
    key: Option<String>,
    node: Node,
}

enum Opened {
    Container(Node),
    Leaf(Bson),
}

fn open(value: Bson) -> Opened {
    match value {
        Bson::Document(d) => Opened::Container(Node::Document { pending: d.into_iter(), done: Document::new() }),
        Bson::Array(a) => {
            let done = Vec::with_capacity(a.len());
            Opened::Container(Node::Array { pending: a.into_iter(), done })
        }
        Bson::ObjectId(oid) => Opened::Leaf(Bson::String(oid.to_hex())),
        other => Opened::Leaf(other),
    }
}

impl Frame {
    fn next_child(&mut self) -> Option<(Option<String>, Bson)> {
        match &mut self.node {
            Node::Document { pending, .. } => pending.next().map(|(k, v)| (Some(k), v)),
            Node::Array { pending, .. } => pending.next().map(|v| (None, v)),
        }
    }

    fn attach(&mut self, key: Option<String>, value: Bson) {
        match &mut self.node {
            Node::Document { done, .. } => {
                done.insert(key.unwrap_or_default(), value);
            }
            Node::Array { done, .. } => done.push(value),
        }
    }

    fn close(self) -> (Option<String>, Bson) {
        let value = match self.node {
            Node::Document { done, .. } => Bson::Document(done),
            Node::Array { done, .. } => Bson::Array(done),
        };
        (self.key, value)
    }
}

/// Replace every `ObjectId` in `value` with its hex string. Idempotent.
pub fn normalize(value: Bson) -> Bson {
    let node = match open(value) {
        Opened::Container(node) => node,
        Opened::Leaf(leaf) => return leaf,
    };

    let mut stack = vec![Frame { key: None, node }];
    let mut result = Bson::Null;
    while let Some(top) = stack.last_mut() {
        match top.next_child() {
            Some((key, child)) => match open(child) {
                Opened::Container(node) => stack.push(Frame { key, node }),
                Opened::Leaf(leaf) => top.attach(key, leaf),
            },
            None => {
                if let Some(frame) = stack.pop() {
                    let (key, value) = frame.close();
                    match stack.last_mut() {
                        Some(parent) => parent.attach(key, value),
                        None => result = value,
                    }
                }
            }
        }
    }
    result
}

/// Normalize each top-level value; the result is a document by construction.
pub fn normalize_document(document: Document) -> Document {
    document.into_iter().map(|(key, value)| (key, normalize(value))).collect()
}

/// Normalized document as relaxed extended JSON (plain numbers, strings
/// for ids).
pub fn to_json(document: Document) -> Value {
    Bson::Document(normalize_document(document)).into_relaxed_extjson()
}
