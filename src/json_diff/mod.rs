// Copyright 2024 The DocAssert Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod misc;
mod node;
pub mod path;

use misc::Indent;
use path::{Key, Path};
use serde_json::{map, Map, Value};
use std::{fmt, iter, slice};
use tracing::{debug, trace};

pub use node::Node;

/// Summary line for documents that compare equal.
pub const EQUAL_SUMMARY: &str = "The data in JSON files are equal";
/// Summary line for documents that diverge somewhere.
pub const DIFFERENT_SUMMARY: &str = "The data in JSON files are different";

/// How should numbers be compared.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NumericMode {
    /// Different numeric types aren't considered equal, so `1` differs from `1.0`.
    #[default]
    Strict,
    /// All numbers are converted to float before comparison.
    AssumeFloat,
}

/// When to leave out the diagnostic for a map key whose values differ.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "binary", derive(clap::ValueEnum))]
pub enum Suppression {
    /// Leave it out when the value is a map, or a sequence holding a map, and
    /// comparing the two values already reported something. Scalars and
    /// sequences of scalars are always reported.
    #[default]
    Redundant,
    /// Leave it out when the value is a map, or a sequence whose first item
    /// is a map. Empty sequences are always reported.
    Shape,
}

impl Suppression {
    fn skips(&self, lhs: Node, already_reported: bool) -> bool {
        match self {
            Suppression::Redundant => already_reported && lhs.holds_map(),
            Suppression::Shape => lhs.opens_with_map(),
        }
    }
}

/// Configuration for how JSON values should be compared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config<'a> {
    numeric_mode: NumericMode,
    suppression: Suppression,
    ignore_paths: Vec<Path<'a>>,
}

impl<'a> Config<'a> {
    /// Create a new [`Config`] with strict numbers, [`Suppression::Redundant`]
    /// and no ignored paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the config's numeric mode.
    pub fn numeric_mode(mut self, numeric_mode: NumericMode) -> Self {
        self.numeric_mode = numeric_mode;
        self
    }

    /// Change the config's suppression policy.
    pub fn suppression(mut self, suppression: Suppression) -> Self {
        self.suppression = suppression;
        self
    }

    /// Add a path to the list of paths to ignore.
    ///
    /// Anything at or below an ignored path compares as equal.
    pub fn ignore_path(mut self, path: Path<'a>) -> Self {
        self.ignore_paths.push(path);
        self
    }

    fn to_ignore(&self, location: &[Key]) -> bool {
        self.ignore_paths.iter().any(|p| p.covers(location))
    }
}

/// What kind of divergence a [`Difference`] describes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DifferenceKind<'a> {
    /// The values have different JSON types.
    Type,
    /// The maps have a different number of keys.
    MapSize,
    /// The key exists in the left map only.
    MissingKey(&'a str),
    /// The values under the key differ.
    Value(&'a str),
    /// The sequences have a different length.
    SequenceLength,
}

/// A single point of divergence between two documents.
///
/// For [`DifferenceKind::MissingKey`] `rhs` is the right-hand map the key
/// was looked up in.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference<'a> {
    path: Path<'a>,
    kind: DifferenceKind<'a>,
    lhs: Node<'a>,
    rhs: Node<'a>,
}

impl<'a> Difference<'a> {
    pub fn path(&self) -> &Path<'a> {
        &self.path
    }

    pub fn kind(&self) -> DifferenceKind<'a> {
        self.kind
    }

    pub fn lhs(&self) -> Node<'a> {
        self.lhs
    }

    pub fn rhs(&self) -> Node<'a> {
        self.rhs
    }
}

impl<'a> fmt::Display for Difference<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            let headline = match self.kind {
                DifferenceKind::Type => "the object types are different".to_string(),
                DifferenceKind::MapSize => {
                    "the lengths of the objects are different".to_string()
                }
                DifferenceKind::MissingKey(key) => format!("the key {} was not found", key),
                DifferenceKind::Value(key) => format!("the values in object {} are different", key),
                DifferenceKind::SequenceLength => {
                    "the lengths of the arrays are different".to_string()
                }
            };

            writeln!(f, "{}: {}", self.path, headline)?;
            writeln!(f, "    lhs:")?;
            writeln!(f, "{}", format!("{:#}", self.lhs).indent(8))?;
            writeln!(f, "    rhs:")?;
            return write!(f, "{}", format!("{:#}", self.rhs).indent(8));
        }

        match self.kind {
            DifferenceKind::Type => write!(
                f,
                "The object type of {} and {} is different",
                self.lhs, self.rhs
            ),
            DifferenceKind::MapSize | DifferenceKind::SequenceLength => write!(
                f,
                "The lengths of {} and {} are different",
                self.lhs, self.rhs
            ),
            DifferenceKind::MissingKey(key) => {
                write!(f, "The key {} was not found in {}", key, self.rhs)
            }
            DifferenceKind::Value(key) => write!(
                f,
                "The values in object {} are different: {} != {}",
                key, self.lhs, self.rhs
            ),
        }
    }
}

/// Outcome of comparing two documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    equal: bool,
    differences: Vec<Difference<'a>>,
}

impl<'a> Comparison<'a> {
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    /// Differences in the order they were found.
    pub fn differences(&self) -> &[Difference<'a>] {
        &self.differences
    }

    pub fn into_differences(self) -> Vec<Difference<'a>> {
        self.differences
    }

    /// One of [`EQUAL_SUMMARY`] or [`DIFFERENT_SUMMARY`].
    pub fn summary(&self) -> &'static str {
        if self.equal {
            EQUAL_SUMMARY
        } else {
            DIFFERENT_SUMMARY
        }
    }
}

/// Compares two JSON values of any shape.
///
/// Values of different types differ without looking any further; maps and
/// sequences are compared with [`compare_map`] and [`compare_sequence`]
/// semantics and scalars by value.
pub fn compare_object<'a>(lhs: &'a Value, rhs: &'a Value, config: Config<'a>) -> Comparison<'a> {
    let mut walker = Walker::new(config);
    let settled = walker.enter(Node::from(lhs), Node::from(rhs));
    walker.drive(settled)
}

/// Compares two maps.
///
/// Maps of different sizes differ without comparing any key. Otherwise
/// every key of `lhs` is looked up in `rhs` and its values compared, and all
/// diverging keys are reported.
pub fn compare_map<'a>(
    lhs: &'a Map<String, Value>,
    rhs: &'a Map<String, Value>,
    config: Config<'a>,
) -> Comparison<'a> {
    let mut walker = Walker::new(config);
    let settled = walker.enter(Node::Map(lhs), Node::Map(rhs));
    walker.drive(settled)
}

/// Compares two sequences position by position.
///
/// Sequences of different lengths differ without comparing any item.
pub fn compare_sequence<'a>(
    lhs: &'a [Value],
    rhs: &'a [Value],
    config: Config<'a>,
) -> Comparison<'a> {
    let mut walker = Walker::new(config);
    let settled = walker.enter(Node::Sequence(lhs), Node::Sequence(rhs));
    walker.drive(settled)
}

/// Depth-first traversal of two documents with an explicit stack, so deeply
/// nested input can't exhaust the call stack.
///
/// `cursor` holds the keys from the root to the pair being compared. A key is
/// pushed before its values are entered and popped once their result has
/// been settled into the enclosing frame.
struct Walker<'a> {
    config: Config<'a>,
    cursor: Vec<Key<'a>>,
    stack: Vec<Frame<'a>>,
    acc: Vec<Difference<'a>>,
}

struct Frame<'a> {
    equal: bool,
    kind: FrameKind<'a>,
}

enum FrameKind<'a> {
    Map {
        rhs: &'a Map<String, Value>,
        entries: map::Iter<'a>,
        pending: Option<Pending<'a>>,
    },
    Sequence {
        pairs: iter::Enumerate<iter::Zip<slice::Iter<'a, Value>, slice::Iter<'a, Value>>>,
    },
}

/// The map entry whose values are currently being compared.
struct Pending<'a> {
    key: &'a str,
    lhs: Node<'a>,
    rhs: Node<'a>,
    reported: usize,
}

impl<'a> Walker<'a> {
    fn new(config: Config<'a>) -> Self {
        Self {
            config,
            cursor: vec![],
            stack: vec![],
            acc: vec![],
        }
    }

    fn report(
        &mut self,
        path: Path<'a>,
        kind: DifferenceKind<'a>,
        lhs: Node<'a>,
        rhs: Node<'a>,
    ) {
        trace!(path = %path, kind = ?kind, "difference");
        self.acc.push(Difference {
            path,
            kind,
            lhs,
            rhs,
        });
    }

    /// Starts comparing two values at the cursor.
    ///
    /// Returns the result right away when no descent is needed, or `None`
    /// after pushing a frame that will settle later.
    fn enter(&mut self, lhs: Node<'a>, rhs: Node<'a>) -> Option<bool> {
        if self.config.to_ignore(&self.cursor) {
            return Some(true);
        }

        let equal = match (lhs, rhs) {
            (Node::Map(lhs), Node::Map(rhs)) => return self.enter_map(lhs, rhs),
            (Node::Sequence(lhs), Node::Sequence(rhs)) => return self.enter_sequence(lhs, rhs),
            (Node::Scalar(l), Node::Scalar(r)) => node::scalar_eq(l, r, self.config.numeric_mode),
            _ => None,
        };

        if equal.is_none() {
            self.report(
                Path::from(self.cursor.as_slice()),
                DifferenceKind::Type,
                lhs,
                rhs,
            );
        }

        Some(equal.unwrap_or(false))
    }

    fn enter_map(
        &mut self,
        lhs: &'a Map<String, Value>,
        rhs: &'a Map<String, Value>,
    ) -> Option<bool> {
        if lhs.len() != rhs.len() {
            self.report(
                Path::from(self.cursor.as_slice()),
                DifferenceKind::MapSize,
                Node::Map(lhs),
                Node::Map(rhs),
            );
            return Some(false);
        }

        self.stack.push(Frame {
            equal: true,
            kind: FrameKind::Map {
                rhs,
                entries: lhs.iter(),
                pending: None,
            },
        });
        None
    }

    fn enter_sequence(&mut self, lhs: &'a [Value], rhs: &'a [Value]) -> Option<bool> {
        if lhs.len() != rhs.len() {
            self.report(
                Path::from(self.cursor.as_slice()),
                DifferenceKind::SequenceLength,
                Node::Sequence(lhs),
                Node::Sequence(rhs),
            );
            return Some(false);
        }

        self.stack.push(Frame {
            equal: true,
            kind: FrameKind::Sequence {
                pairs: lhs.iter().zip(rhs).enumerate(),
            },
        });
        None
    }

    /// Runs the traversal until every frame has settled.
    ///
    /// `settled` is the result of the first `enter*` call.
    fn drive(mut self, mut settled: Option<bool>) -> Comparison<'a> {
        while !self.stack.is_empty() {
            if let Some(equal) = settled.take() {
                self.settle(equal);
            }

            settled = match self.next_pair() {
                Some((key, lhs, rhs)) => {
                    self.cursor.push(key);
                    self.enter(lhs, rhs)
                }
                None => self.stack.pop().map(|frame| frame.equal),
            };
        }

        let equal = settled.unwrap_or(true);
        debug!(equal, differences = self.acc.len(), "comparison finished");

        Comparison {
            equal,
            differences: self.acc,
        }
    }

    /// Hands the result of the values under the cursor's last key to the
    /// top frame and moves the cursor back to that frame.
    fn settle(&mut self, equal: bool) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };

        let pending = match &mut frame.kind {
            FrameKind::Map { pending, .. } => pending.take(),
            FrameKind::Sequence { .. } => None,
        };

        if !equal {
            frame.equal = false;

            if let Some(pending) = pending {
                let already_reported = self.acc.len() > pending.reported;
                if !self.config.suppression.skips(pending.lhs, already_reported) {
                    self.report(
                        Path::from(self.cursor.as_slice()),
                        DifferenceKind::Value(pending.key),
                        pending.lhs,
                        pending.rhs,
                    );
                }
            }
        }

        self.cursor.pop();
    }

    /// Advances the top frame to its next pair of values.
    ///
    /// Keys missing from the right-hand map are reported on the way.
    fn next_pair(&mut self) -> Option<(Key<'a>, Node<'a>, Node<'a>)> {
        let frame = self.stack.last_mut()?;

        match &mut frame.kind {
            FrameKind::Sequence { pairs } => pairs
                .next()
                .map(|(idx, (lhs, rhs))| (Key::Idx(idx), Node::from(lhs), Node::from(rhs))),
            FrameKind::Map {
                rhs,
                entries,
                pending,
            } => {
                let rhs = *rhs;

                for (key, lhs_value) in entries.by_ref() {
                    if let Some(rhs_value) = rhs.get(key) {
                        *pending = Some(Pending {
                            key,
                            lhs: Node::from(lhs_value),
                            rhs: Node::from(rhs_value),
                            reported: self.acc.len(),
                        });
                        return Some((
                            Key::Field(key),
                            Node::from(lhs_value),
                            Node::from(rhs_value),
                        ));
                    }

                    let path = Path::from(self.cursor.as_slice()).append(Key::Field(key));
                    if self.config.to_ignore(path.keys()) {
                        continue;
                    }

                    frame.equal = false;
                    trace!(path = %path, "missing key");
                    self.acc.push(Difference {
                        path,
                        kind: DifferenceKind::MissingKey(key),
                        lhs: Node::from(lhs_value),
                        rhs: Node::Map(rhs),
                    });
                }

                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    #[allow(unused_imports)]
    use super::*;
    use super::path::JSONPath;
    use serde_json::{json, Result, Value};
    use std::fs;

    fn load_json_from_file(file_path: &str) -> Result<Value> {
        let data = fs::read_to_string(file_path).expect("Unable to read file");
        serde_json::from_str(&data)
    }

    fn diff<'a>(lhs: &'a Value, rhs: &'a Value) -> Comparison<'a> {
        compare_object(lhs, rhs, Config::new())
    }

    fn messages(comparison: &Comparison) -> Vec<String> {
        comparison
            .differences()
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[test]
    fn test_reflexive() {
        for json in [
            json!(null),
            json!(true),
            json!(1.5),
            json!("text"),
            json!([]),
            json!({}),
            json!({ "a": { "b": [1, 2, { "c": 3 }] }, "d": [[], {}, null] }),
        ] {
            let comparison = diff(&json, &json);
            assert!(comparison.is_equal());
            assert!(comparison.differences().is_empty());
            assert_eq!(comparison.summary(), EQUAL_SUMMARY);
        }
    }

    #[test]
    fn test_type_mismatch() {
        let pairs = [
            (json!({}), json!([])),
            (json!({ "a": 1 }), json!(1)),
            (json!([1]), json!("[1]")),
            (json!(null), json!({})),
        ];

        for (lhs, rhs) in pairs.iter() {
            let comparison = diff(lhs, rhs);
            assert!(!comparison.is_equal());
            assert_eq!(comparison.differences().len(), 1);
            assert_eq!(comparison.differences()[0].kind(), DifferenceKind::Type);
            assert!(comparison.differences()[0].path().is_root());
        }

        let lhs = json!({ "a": 1 });
        let rhs = json!([1]);
        assert_eq!(
            messages(&diff(&lhs, &rhs)),
            vec![r#"The object type of {"a":1} and [1] is different"#]
        );
    }

    #[test]
    fn test_scalars() {
        assert!(diff(&json!(1), &json!(1)).is_equal());
        assert!(diff(&json!("a"), &json!("a")).is_equal());
        assert!(!diff(&json!(false), &json!(true)).is_equal());

        // different scalar types are reported, different values are not
        let (one, yes, text, two) = (json!(1), json!(true), json!("1"), json!(2));

        let comparison = diff(&one, &yes);
        assert!(!comparison.is_equal());
        assert_eq!(comparison.differences()[0].kind(), DifferenceKind::Type);

        let comparison = diff(&text, &one);
        assert!(!comparison.is_equal());
        assert_eq!(comparison.differences().len(), 1);

        let comparison = diff(&one, &two);
        assert!(!comparison.is_equal());
        assert!(comparison.differences().is_empty());
    }

    #[test]
    fn test_numeric_mode() {
        let lhs = json!({ "a": 1 });
        let rhs = json!({ "a": 1.0 });

        assert!(!diff(&lhs, &rhs).is_equal());

        let comparison = compare_object(
            &lhs,
            &rhs,
            Config::new().numeric_mode(NumericMode::AssumeFloat),
        );
        assert!(comparison.is_equal());
    }

    #[test]
    fn test_map_size_short_circuit() {
        let lhs = json!({ "a": 1 });
        let rhs = json!({ "a": 1, "b": 2 });
        let comparison = diff(&lhs, &rhs);

        assert!(!comparison.is_equal());
        assert_eq!(
            messages(&comparison),
            vec![r#"The lengths of {"a":1} and {"a":1,"b":2} are different"#]
        );

        // size is checked before any key
        let lhs = json!({ "a": 1, "x": 5 });
        let rhs = json!({ "b": 2 });
        let comparison = diff(&lhs, &rhs);
        assert_eq!(comparison.differences().len(), 1);
        assert_eq!(comparison.differences()[0].kind(), DifferenceKind::MapSize);
    }

    #[test]
    fn test_every_key_reported() {
        let lhs = json!({ "a": 1, "b": 2 });
        let rhs = json!({ "a": 9, "b": 9 });
        let comparison = diff(&lhs, &rhs);

        assert!(!comparison.is_equal());
        assert_eq!(
            messages(&comparison),
            vec![
                "The values in object a are different: 1 != 9",
                "The values in object b are different: 2 != 9",
            ]
        );
    }

    #[test]
    fn test_missing_key_keeps_going() {
        let lhs = json!({ "a": 1, "b": 2, "c": 3 });
        let rhs = json!({ "a": 1, "x": 2, "c": 4 });
        let comparison = diff(&lhs, &rhs);

        assert!(!comparison.is_equal());
        assert_eq!(
            messages(&comparison),
            vec![
                r#"The key b was not found in {"a":1,"x":2,"c":4}"#,
                "The values in object c are different: 3 != 4",
            ]
        );
        assert_eq!(comparison.differences()[0].path().to_string(), "$.b");
        assert_eq!(comparison.differences()[0].lhs(), Node::from(&json!(2)));
    }

    #[test]
    fn test_sequences() {
        assert!(diff(&json!([1, 2]), &json!([1, 2])).is_equal());
        assert!(diff(&json!([]), &json!([])).is_equal());
        assert!(!diff(&json!([1, 2]), &json!([2, 1])).is_equal());

        let lhs = json!([1, 2]);
        let rhs = json!([1, 2, 3]);
        let comparison = diff(&lhs, &rhs);
        assert!(!comparison.is_equal());
        assert_eq!(
            messages(&comparison),
            vec!["The lengths of [1,2] and [1,2,3] are different"]
        );

        // every index is visited
        let lhs = json!([{ "a": 1 }, 0, { "a": 2 }]);
        let rhs = json!([{ "a": 3 }, 0, { "a": 4 }]);
        let comparison = diff(&lhs, &rhs);
        let paths = comparison
            .differences()
            .iter()
            .map(|d| d.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(paths, vec!["$[0].a", "$[2].a"]);
    }

    #[test]
    fn test_nested() {
        let lhs = json!({ "a": { "b": [1, 2, { "c": 3 }] } });
        let copy = lhs.clone();
        assert!(diff(&lhs, &copy).is_equal());

        let rhs = json!({ "a": { "b": [1, 2, { "c": 4 }] } });
        let comparison = diff(&lhs, &rhs);
        assert!(!comparison.is_equal());
        assert_eq!(
            messages(&comparison),
            vec!["The values in object c are different: 3 != 4"]
        );
        assert_eq!(comparison.differences()[0].path().to_string(), "$.a.b[2].c");
    }

    #[test]
    fn test_sequence_of_scalars_reported_at_key() {
        let lhs = json!({ "x": 1, "y": [1, 2] });
        let rhs = json!({ "x": 1, "y": [1, 3] });
        let comparison = diff(&lhs, &rhs);

        assert_eq!(comparison.summary(), DIFFERENT_SUMMARY);
        assert_eq!(
            messages(&comparison),
            vec!["The values in object y are different: [1,2] != [1,3]"]
        );
    }

    #[test]
    fn test_redundant_suppression() {
        // nested maps report the innermost key only
        let lhs = json!({ "a": { "b": { "c": 1 } } });
        let rhs = json!({ "a": { "b": { "c": 2 } } });
        assert_eq!(
            messages(&diff(&lhs, &rhs)),
            vec!["The values in object c are different: 1 != 2"]
        );

        // a map anywhere in the sequence silences the key
        let lhs = json!({ "a": [0, { "b": 1 }] });
        let rhs = json!({ "a": [0, { "b": 2 }] });
        assert_eq!(
            messages(&diff(&lhs, &rhs)),
            vec!["The values in object b are different: 1 != 2"]
        );

        // sequences of scalars always name the key
        let lhs = json!({ "a": [], "d": [1, 2] });
        let rhs = json!({ "a": [1], "d": [1] });
        assert_eq!(
            messages(&diff(&lhs, &rhs)),
            vec![
                "The lengths of [] and [1] are different",
                "The values in object a are different: [] != [1]",
                "The lengths of [1,2] and [1] are different",
                "The values in object d are different: [1,2] != [1]",
            ]
        );

        // a scalar after a leading map is still reported
        let lhs = json!({ "a": [{ "b": 1 }, 2] });
        let rhs = json!({ "a": [{ "b": 1 }, 3] });
        assert_eq!(
            messages(&diff(&lhs, &rhs)),
            vec![r#"The values in object a are different: [{"b":1},2] != [{"b":1},3]"#]
        );
    }

    #[test]
    fn test_shape_suppression() {
        let config = || Config::new().suppression(Suppression::Shape);

        let lhs = json!({ "a": { "b": 1 } });
        let rhs = json!({ "a": { "b": 2 } });
        let comparison = compare_object(&lhs, &rhs, config());
        assert_eq!(
            messages(&comparison),
            vec!["The values in object b are different: 1 != 2"]
        );

        // a leading map silences the key, even when nothing else was reported
        let lhs = json!({ "a": [{ "b": 1 }, 2] });
        let rhs = json!({ "a": [{ "b": 1 }, 3] });
        let comparison = compare_object(&lhs, &rhs, config());
        assert!(!comparison.is_equal());
        assert!(comparison.differences().is_empty());

        // a leading scalar does not, even when a later map was reported
        let lhs = json!({ "a": [0, { "b": 1 }] });
        let rhs = json!({ "a": [0, { "b": 2 }] });
        let comparison = compare_object(&lhs, &rhs, config());
        assert_eq!(
            messages(&comparison),
            vec![
                "The values in object b are different: 1 != 2",
                r#"The values in object a are different: [0,{"b":1}] != [0,{"b":2}]"#,
            ]
        );

        // empty sequences never suppress
        let lhs = json!({ "a": [] });
        let rhs = json!({ "a": [1] });
        let comparison = compare_object(&lhs, &rhs, config());
        assert_eq!(
            messages(&comparison),
            vec![
                "The lengths of [] and [1] are different",
                "The values in object a are different: [] != [1]",
            ]
        );
    }

    #[test]
    fn test_type_mismatch_under_key() {
        let lhs = json!({ "a": { "b": 1 }, "c": "1" });
        let rhs = json!({ "a": [1], "c": 1 });
        assert_eq!(
            messages(&diff(&lhs, &rhs)),
            vec![
                r#"The object type of {"b":1} and [1] is different"#,
                r#"The object type of "1" and 1 is different"#,
                r#"The values in object c are different: "1" != 1"#,
            ]
        );
    }

    #[test]
    fn test_compare_map_and_sequence() {
        let lhs = json!({ "a": 1, "b": [1] });
        let rhs = json!({ "a": 1, "b": [2] });
        let comparison = compare_map(
            lhs.as_object().unwrap(),
            rhs.as_object().unwrap(),
            Config::new(),
        );
        assert!(!comparison.is_equal());
        assert_eq!(comparison.differences()[0].kind(), DifferenceKind::Value("b"));

        let lhs = json!([1, [2, 3]]);
        let rhs = json!([1, [2, 3]]);
        let comparison = compare_sequence(
            lhs.as_array().unwrap(),
            rhs.as_array().unwrap(),
            Config::new(),
        );
        assert!(comparison.is_equal());

        let comparison = compare_sequence(&[], &[], Config::new());
        assert!(comparison.is_equal());
    }

    #[test]
    fn test_compare_map_and_sequence_ignore_root() {
        let root = || Config::new().ignore_path("$".jsonpath().unwrap());

        let lhs = json!({ "a": 1 });
        let rhs = json!({ "a": 1, "b": 2 });
        let comparison = compare_map(lhs.as_object().unwrap(), rhs.as_object().unwrap(), root());
        assert!(comparison.is_equal());
        assert!(comparison.differences().is_empty());

        let lhs = json!([1, 2]);
        let rhs = json!([3]);
        let comparison =
            compare_sequence(lhs.as_array().unwrap(), rhs.as_array().unwrap(), root());
        assert!(comparison.is_equal());
        assert!(comparison.differences().is_empty());
    }

    #[test]
    fn test_ignore_paths() {
        let lhs = json!({ "a": { "b": [{ "c": 0 }, { "c": 1 }] }, "id": 1 });
        let rhs = json!({ "a": { "b": [{ "c": 0 }, { "c": 2 }] }, "id": 2 });

        let config = Config::new()
            .ignore_path("$.a.b[*].c".jsonpath().unwrap())
            .ignore_path("$.id".jsonpath().unwrap());
        assert!(compare_object(&lhs, &rhs, config).is_equal());

        let config = Config::new().ignore_path("$.a.b[0:1]".jsonpath().unwrap());
        let comparison = compare_object(&lhs, &rhs, config);
        assert!(!comparison.is_equal());
        assert_eq!(comparison.differences().len(), 2);

        // missing keys under an ignored path are not reported either
        let lhs = json!({ "a": 1, "b": 2 });
        let rhs = json!({ "a": 1, "c": 2 });
        let config = Config::new().ignore_path("$.b".jsonpath().unwrap());
        assert!(compare_object(&lhs, &rhs, config).is_equal());

        // the whole document
        let config = Config::new().ignore_path("$".jsonpath().unwrap());
        assert!(compare_object(&json!([1]), &json!({}), config).is_equal());
    }

    #[test]
    fn test_pretty_display() {
        let lhs = json!({ "y": [1, 2] });
        let rhs = json!({ "y": [1, 3] });
        let comparison = diff(&lhs, &rhs);

        assert_eq!(
            format!("{:#}", comparison.differences()[0]),
            [
                "$.y: the values in object y are different",
                "    lhs:",
                "        [",
                "          1,",
                "          2",
                "        ]",
                "    rhs:",
                "        [",
                "          1,",
                "          3",
                "        ]",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_deeply_nested() {
        let depth = 100_000;
        let nest = |leaf: Value| {
            let mut value = leaf;
            for _ in 0..depth {
                let mut map = Map::new();
                map.insert("a".to_string(), Value::Array(vec![value]));
                value = Value::Object(map);
            }
            value
        };
        let lhs = nest(json!(1));
        let rhs = nest(json!(2));

        {
            let comparison = diff(&lhs, &rhs);
            assert!(!comparison.is_equal());
            assert_eq!(comparison.differences().len(), 1);
            assert_eq!(comparison.differences()[0].path().keys().len(), depth * 2 - 1);
        }

        // dropping a value this deep would recurse
        std::mem::forget(lhs);
        std::mem::forget(rhs);
    }

    #[test]
    fn test_complex_jsons() {
        let lhs_json = load_json_from_file("tests/data/lhs.json").expect("Error parsing lhs.json");
        let rhs_json = load_json_from_file("tests/data/rhs.json").expect("Error parsing rhs.json");

        let comparison = diff(&lhs_json, &rhs_json);
        assert!(!comparison.is_equal());
        let paths = comparison
            .differences()
            .iter()
            .map(|d| d.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                "$.user.name",
                "$.user.profile.age",
                "$.user.profile.tags",
                "$.user.comments[0].timestamp",
                "$.user.comments[1].votes",
                "$.user.settings",
            ]
        );

        let comparison = compare_object(
            &lhs_json,
            &rhs_json,
            Config::new()
                .ignore_path("$.user.name".jsonpath().unwrap())
                .ignore_path("$.user.profile".jsonpath().unwrap())
                .ignore_path("$.user.comments[*].*".jsonpath().unwrap())
                .ignore_path("$.user.settings".jsonpath().unwrap()),
        );
        assert!(comparison.is_equal());
    }
}
