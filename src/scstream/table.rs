//! The typed value and key/value/sub-table tree the parser produces, plus
//! the lookup and writer helpers the object mapper is built from.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::datetime::CSEDateTime;
use crate::mathfuncs::ieee754::{is_no_data, NO_DATA, NO_DATA_UINT};

use super::ParseError;

/// The scalar element classes a value can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// A numeric literal.
    Number,
    /// A quoted string.
    String,
    /// `true` / `false`.
    Boolean,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Number => write!(f, "number"),
            ElementKind::String => write!(f, "string"),
            ElementKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// The shape tag of a parsed value. Array, Matrix and Boolean are three
/// distinct tags; a matrix additionally carries its nested-row map.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueTag {
    /// A single scalar.
    Scalar(ElementKind),
    /// A parenthesised homogeneous list.
    Array(ElementKind),
    /// A brace-delimited matrix with row-start markers.
    Matrix(ElementKind),
    /// A bare variable reference.
    Variable,
}

/// A parsed value: its tag, the raw scalar lexemes, the numeric base, the
/// source position and (for matrices) the sparse map from row-start index to
/// the nested sub-values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    pub(crate) tag: Option<ValueTag>,
    /// The raw scalar lexemes in source order (strings keep their quotes).
    pub items: Vec<String>,
    /// Row-start index to nested values, for matrices built from nested
    /// braces.
    pub sub_matrices: BTreeMap<usize, Vec<Value>>,
    /// The numeric base of the last numeric element.
    pub base: u32,
    /// 1-based (line, column) of the value's first token.
    pub position: (u64, u64),
}

impl Value {
    /// A scalar number value from a formatted literal.
    pub fn number<S: Into<String>>(text: S) -> Self {
        Value {
            tag: Some(ValueTag::Scalar(ElementKind::Number)),
            items: vec![text.into()],
            base: 10,
            ..Default::default()
        }
    }

    /// A scalar string value (quotes added here).
    pub fn string<S: AsRef<str>>(text: S) -> Self {
        Value {
            tag: Some(ValueTag::Scalar(ElementKind::String)),
            items: vec![format!("\"{}\"", text.as_ref())],
            base: 10,
            ..Default::default()
        }
    }

    /// A scalar boolean value.
    pub fn boolean(v: bool) -> Self {
        Value {
            tag: Some(ValueTag::Scalar(ElementKind::Boolean)),
            items: vec![v.to_string()],
            base: 10,
            ..Default::default()
        }
    }

    /// A numeric array value from formatted literals.
    pub fn array<S: Into<String>, I: IntoIterator<Item = S>>(items: I) -> Self {
        Value {
            tag: Some(ValueTag::Array(ElementKind::Number)),
            items: items.into_iter().map(Into::into).collect(),
            base: 10,
            ..Default::default()
        }
    }

    /// The shape tag; `None` only for an empty buffer that never received a
    /// token.
    pub fn tag(&self) -> Option<ValueTag> {
        self.tag
    }

    /// The element kind, if the tag carries one.
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self.tag? {
            ValueTag::Scalar(k) | ValueTag::Array(k) | ValueTag::Matrix(k) => Some(k),
            ValueTag::Variable => None,
        }
    }

    fn wrong_kind(&self, wanted: ElementKind) -> ParseError {
        ParseError::Value {
            reason: format!(
                "value is a {}, not a {wanted}",
                self.element_kind()
                    .map_or("variable".to_string(), |k| k.to_string())
            ),
        }
    }

    /// The `idx`-th element as a double.
    pub fn get_number(&self, idx: usize) -> Result<f64, ParseError> {
        if self.element_kind() != Some(ElementKind::Number) {
            return Err(self.wrong_kind(ElementKind::Number));
        }
        let item = self.items.get(idx).ok_or_else(|| ParseError::Value {
            reason: format!("value has no element {idx}"),
        })?;
        if self.base == 10 {
            item.parse().map_err(|_| ParseError::Value {
                reason: format!("unparseable number {item:?}"),
            })
        } else {
            self.get_based_integer(idx).map(|v| v as f64)
        }
    }

    /// The `idx`-th element as an integer honouring the lexed base prefix.
    pub fn get_based_integer(&self, idx: usize) -> Result<i64, ParseError> {
        if self.element_kind() != Some(ElementKind::Number) {
            return Err(self.wrong_kind(ElementKind::Number));
        }
        let item = self.items.get(idx).ok_or_else(|| ParseError::Value {
            reason: format!("value has no element {idx}"),
        })?;
        let (sign, body) = match item.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1, item.strip_prefix('+').unwrap_or(item)),
        };
        let digits = match self.base {
            16 => body.trim_start_matches("0x").trim_start_matches("0X"),
            2 => body.trim_start_matches("0b").trim_start_matches("0B"),
            _ => body,
        };
        if self.base == 10 {
            // A decimal item may still be a float literal.
            return digits
                .parse::<f64>()
                .map(|v| sign * v as i64)
                .map_err(|_| ParseError::Value {
                    reason: format!("unparseable integer {item:?}"),
                });
        }
        i64::from_str_radix(digits, self.base)
            .map(|v| sign * v)
            .map_err(|_| ParseError::Value {
                reason: format!("unparseable base-{} integer {item:?}", self.base),
            })
    }

    /// The `idx`-th element as a string with the quotes stripped.
    pub fn get_string(&self, idx: usize) -> Result<String, ParseError> {
        if self.element_kind() != Some(ElementKind::String) {
            return Err(self.wrong_kind(ElementKind::String));
        }
        let item = self.items.get(idx).ok_or_else(|| ParseError::Value {
            reason: format!("value has no element {idx}"),
        })?;
        Ok(item.trim_matches('"').to_string())
    }

    /// The first element as an unquoted string.
    pub fn as_string(&self) -> Result<String, ParseError> {
        self.get_string(0)
    }

    /// The `idx`-th element as a boolean.
    pub fn get_boolean(&self, idx: usize) -> Result<bool, ParseError> {
        if self.element_kind() != Some(ElementKind::Boolean) {
            return Err(self.wrong_kind(ElementKind::Boolean));
        }
        Ok(self.items.get(idx).map(|s| s == "true").unwrap_or(false))
    }

    /// The value as an `n`-element double array, padded with the no-data
    /// sentinel where the source ran short.
    pub fn as_number_array(&self, n: usize) -> Result<Vec<f64>, ParseError> {
        if self.element_kind() != Some(ElementKind::Number) {
            return Err(self.wrong_kind(ElementKind::Number));
        }
        let mut out = Vec::with_capacity(n.max(self.items.len()));
        for idx in 0..n.max(self.items.len()) {
            if idx < self.items.len() {
                out.push(self.get_number(idx)?);
            } else {
                out.push(NO_DATA);
            }
        }
        Ok(out)
    }

    /// The first element parsed as a date or date-time string.
    pub fn as_date_time(&self) -> Result<CSEDateTime, ParseError> {
        let text = self.as_string()?;
        CSEDateTime::parse(&text).map_err(|e| ParseError::Value {
            reason: e.to_string(),
        })
    }

    /// Renders the value back to catalog source.
    pub fn to_source(&self) -> String {
        match self.tag {
            Some(ValueTag::Array(_)) => {
                let mut s = String::from("(");
                s.push_str(&self.items.join(", "));
                s.push(')');
                s
            }
            Some(ValueTag::Matrix(_)) => {
                let mut s = String::from("{ ");
                for i in 0..=self.items.len() {
                    if let Some(nested) = self.sub_matrices.get(&i) {
                        for v in nested {
                            s.push_str(&v.to_source());
                            s.push(' ');
                        }
                    }
                    if i < self.items.len() {
                        s.push_str(&self.items[i]);
                        s.push(' ');
                    }
                }
                s.push('}');
                s
            }
            _ => self.items.first().cloned().unwrap_or_default(),
        }
    }
}

/// One record of a catalog: a key, its value list and an optional sub-table.
#[derive(Debug, Clone, Default)]
pub struct SCKeyValue {
    /// The key name.
    pub key: String,
    /// The values in source order.
    pub values: Vec<Value>,
    /// The brace-delimited child table, if any.
    pub sub_table: Option<Rc<SCSTable>>,
}

/// A parse tree: an ordered sequence of key records. Child tables are shared
/// pointers, so sub-trees stay alive as long as any holder does.
#[derive(Debug, Clone, Default)]
pub struct SCSTable {
    pub(crate) entries: Vec<SCKeyValue>,
}

impl SCSTable {
    /// The records in source order.
    pub fn entries(&self) -> &[SCKeyValue] {
        &self.entries
    }

    /// Mutable access to the records.
    pub fn entries_mut(&mut self) -> &mut Vec<SCKeyValue> {
        &mut self.entries
    }

    /// The first record with the given key, by linear scan.
    pub fn find(&self, key: &str) -> Option<&SCKeyValue> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Every record with the given key.
    pub fn find_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a SCKeyValue> {
        self.entries.iter().filter(move |e| e.key == key)
    }

    /// The first record whose key starts with `prefix` (used for unit
    /// suffixes like `RadiusKm`).
    pub fn find_with_prefix(&self, prefix: &str) -> Option<&SCKeyValue> {
        self.entries.iter().find(|e| e.key.starts_with(prefix))
    }

    /// The first record whose key contains `fragment`.
    pub fn find_with_keyword(&self, fragment: &str) -> Option<&SCKeyValue> {
        self.entries.iter().find(|e| e.key.contains(fragment))
    }

    /// A scalar double by key.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.find(key)?.values.first()?.get_number(0).ok()
    }

    /// A scalar double by key with a unit suffix: the suffix after `key` maps
    /// through `units` to a multiplier, an exact match uses `default_mult`.
    pub fn get_f64_with_unit(
        &self,
        key: &str,
        default_mult: f64,
        units: &[(&str, f64)],
    ) -> Option<f64> {
        let entry = self.find_with_prefix(key)?;
        let raw = entry.values.first()?.get_number(0).ok()?;
        if entry.key != key {
            let suffix = &entry.key[key.len()..];
            if let Some((_, mult)) = units.iter().find(|(u, _)| *u == suffix) {
                return Some(raw * mult);
            }
        }
        Some(raw * default_mult)
    }

    /// An unquoted string by key.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.find(key)?.values.first()?.as_string().ok()
    }

    /// A boolean by key.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.find(key)?.values.first()?.get_boolean(0).ok()
    }

    /// A base-honouring integer by key.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.find(key)?
            .values
            .first()?
            .get_based_integer(0)
            .ok()
            .map(|v| v as u64)
    }

    /// An `n`-element double array by key, padded with the sentinel.
    pub fn get_array(&self, key: &str, n: usize) -> Option<Vec<f64>> {
        self.find(key)?.values.first()?.as_number_array(n).ok()
    }

    /// A date-time by key.
    pub fn get_date_time(&self, key: &str) -> Option<CSEDateTime> {
        self.find(key)?.values.first()?.as_date_time().ok()
    }

    /// The child table of a key.
    pub fn get_sub_table(&self, key: &str) -> Option<Rc<SCSTable>> {
        self.find(key)?.sub_table.clone()
    }

    /// Appends a scalar double record unless the value is the no-data
    /// sentinel.
    pub fn add_f64(&mut self, key: &str, value: f64) {
        if !is_no_data(value) && !value.is_nan() {
            self.entries.push(SCKeyValue {
                key: key.to_string(),
                values: vec![Value::number(format_f64(value))],
                sub_table: None,
            });
        }
    }

    /// Appends a string record unless the string is empty.
    pub fn add_string(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.entries.push(SCKeyValue {
                key: key.to_string(),
                values: vec![Value::string(value)],
                sub_table: None,
            });
        }
    }

    /// Appends a boolean record only when the flag is set (false is the
    /// no-data state of a toggle).
    pub fn add_bool(&mut self, key: &str, value: bool) {
        if value {
            self.entries.push(SCKeyValue {
                key: key.to_string(),
                values: vec![Value::boolean(value)],
                sub_table: None,
            });
        }
    }

    /// Appends an integer record unless the value is the integer sentinel.
    pub fn add_u64(&mut self, key: &str, value: u64) {
        if value != NO_DATA_UINT {
            self.entries.push(SCKeyValue {
                key: key.to_string(),
                values: vec![Value::number(value.to_string())],
                sub_table: None,
            });
        }
    }

    /// Appends an array record unless any element is the sentinel.
    pub fn add_array(&mut self, key: &str, values: &[f64]) {
        if values.iter().any(|v| is_no_data(*v) || v.is_nan()) {
            return;
        }
        self.entries.push(SCKeyValue {
            key: key.to_string(),
            values: vec![Value::array(values.iter().map(|v| format_f64(*v)))],
            sub_table: None,
        });
    }

    /// Appends a date record when the date is valid.
    pub fn add_date(&mut self, key: &str, value: &crate::datetime::CSEDate) {
        if value.is_valid() {
            self.add_string(key, &value.to_string());
        }
    }

    /// Appends a sub-table record when the child is non-empty.
    pub fn add_sub_table(&mut self, key: &str, child: SCSTable) {
        if !child.entries.is_empty() {
            self.entries.push(SCKeyValue {
                key: key.to_string(),
                values: Vec::new(),
                sub_table: Some(Rc::new(child)),
            });
        }
    }

    /// Renders the whole tree back to catalog source.
    ///
    /// ```
    /// use cse_rs::scstream::SCSTable;
    ///
    /// let mut t = SCSTable::default();
    /// t.add_f64("Mass", 1.0);
    /// assert_eq!(t.to_source(), "Mass            1\n");
    /// ```
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, 0);
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        let pad = "    ".repeat(depth);
        for entry in &self.entries {
            out.push_str(&pad);
            if entry.values.is_empty() && entry.sub_table.is_some() {
                out.push_str(&entry.key);
            } else {
                // Column-align scalar values the way hand-written catalogs do.
                out.push_str(&format!("{:<15} ", entry.key));
                let rendered: Vec<String> = entry.values.iter().map(|v| v.to_source()).collect();
                out.push_str(&rendered.join(" "));
            }
            out.push('\n');
            if let Some(sub) = &entry.sub_table {
                out.push_str(&pad);
                out.push_str("{\n");
                sub.write_indented(out, depth + 1);
                out.push_str(&pad);
                out.push_str("}\n");
            }
        }
    }
}

/// Formats a double with enough digits to round-trip exactly.
pub(crate) fn format_f64(v: f64) -> String {
    let s = format!("{v}");
    // The shortest representation already survives re-parsing bit-exactly.
    debug_assert_eq!(s.parse::<f64>().ok(), Some(v));
    s
}
