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

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod json_diff;
mod load;

pub use json_diff::path::{JSONPath, Key, Path, PathError};
pub use json_diff::{
    compare_map, compare_object, compare_sequence, Comparison, Config, Difference,
    DifferenceKind, Node, NumericMode, Suppression, DIFFERENT_SUMMARY, EQUAL_SUMMARY,
};
pub use load::{load_json, LoadError};
