//! The table-driven shift-reduce parser for catalog scripts.
//!
//! Grammar (terminals `i v o n s b , ( ) { }`):
//!
//! ```text
//! S -> iTS | i{B}S | iS | BS | ε
//! T -> VT | V | N
//! B -> EoE
//! V -> E | (A) | {M}
//! N -> {S}
//! E -> n | s | v | b
//! A -> E | A,E | AE
//! M -> V,M | VM | V, | V
//! ```
//!
//! The engine keeps the state and symbol stacks of the automaton plus three
//! semantic stacks: the key record under construction, completed values and
//! the expression buffer. Reduction actions are tied to production indices.
//! `B -> EoE` is the `.se` log-level directive: `LogLevel == n` (with
//! `LogLevel` registered as a variable) clamps the crate's log verbosity and
//! leaves no tree node.

use std::rc::Rc;

use super::lexer::Token;
use super::table::{ElementKind, SCKeyValue, SCSTable, Value, ValueTag};
use super::tables::{LrState, PRODUCTIONS, STATES};
use super::ParseError;

const END: u8 = 0x03;

enum Action {
    Accept,
    Shift(usize),
    Reduce(usize),
    Goto(usize),
    Error,
}

fn next_action(state: &LrState, symbol: u8) -> Action {
    if state.accept {
        return Action::Accept;
    }
    if let Some(&(_, s)) = state.shifts.iter().find(|(k, _)| *k == symbol) {
        return Action::Shift(s as usize);
    }
    if let Some(&(_, p)) = state.reduces.iter().find(|(k, _)| *k == symbol) {
        return Action::Reduce(p as usize);
    }
    if let Some(&(_, s)) = state.gotos.iter().find(|(k, _)| *k == symbol) {
        return Action::Goto(s as usize);
    }
    if let Some(&(_, p)) = state.reduces.iter().find(|(k, _)| *k == 0) {
        return Action::Reduce(p as usize);
    }
    Action::Error
}

/// Maps the directive's numeric level onto the log facade's filter.
fn clamp_log_level(level: i64) {
    let wanted = match level {
        i64::MIN..=0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if wanted < log::max_level() {
        log::set_max_level(wanted);
    }
}

/// The parser over a lexed token stream.
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    /// Wraps a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens }
    }

    /// Runs the automaton to completion and returns the root table.
    pub fn run(&self) -> Result<SCSTable, ParseError> {
        let symbols: Vec<u8> = self
            .tokens
            .iter()
            .map(Token::symbol)
            .chain(std::iter::once(END))
            .collect();

        let mut state_stack: Vec<usize> = vec![0];
        let mut symbol_stack: Vec<u8> = vec![0x02]; // STX
        let mut position = 0usize;

        // Semantic state.
        let mut kt_stack: Vec<SCKeyValue> = Vec::new();
        let mut finished: Vec<SCKeyValue> = Vec::new();
        let mut value_stack: Vec<Value> = Vec::new();
        let mut buffer = Value::default();
        let mut previous: Option<&Token> = None;

        loop {
            let state_idx = *state_stack.last().expect("state stack never empty");
            let state = &STATES[state_idx];
            let symbol = symbols[position.min(symbols.len() - 1)];
            let word = self.tokens.get(position);
            let pos = word
                .or(previous)
                .map(|t| t.position)
                .unwrap_or((1, 1));

            match next_action(state, symbol) {
                Action::Accept => {
                    log::debug!("catalog parser: accepted");
                    let mut root = SCSTable::default();
                    while let Some(rec) = finished.pop() {
                        root.entries_mut().push(rec);
                    }
                    return Ok(root);
                }
                Action::Shift(next) | Action::Goto(next) => {
                    state_stack.push(next);
                    symbol_stack.push(symbol);
                    position += 1;
                    if let Some(tok) = word {
                        previous = Some(tok);
                        match symbol {
                            b'i' => kt_stack.push(SCKeyValue {
                                key: tok.value.clone(),
                                ..Default::default()
                            }),
                            b'o' => buffer.items.push(tok.value.clone()),
                            _ => {}
                        }
                    }
                    log::debug!(
                        "catalog parser: shift {:?} -> state {next}",
                        char::from(symbol)
                    );
                }
                Action::Reduce(production) => {
                    let (lhs, rhs_len) = PRODUCTIONS[production];
                    for _ in 0..rhs_len {
                        state_stack.pop();
                        symbol_stack.pop();
                    }
                    symbol_stack.push(lhs);
                    self.reduce_action(
                        production,
                        previous,
                        &mut kt_stack,
                        &mut finished,
                        &mut value_stack,
                        &mut buffer,
                        state_idx,
                    )?;
                    let top = *state_stack.last().expect("state stack never empty");
                    match next_action(&STATES[top], lhs) {
                        Action::Goto(next) | Action::Shift(next) => {
                            state_stack.push(next);
                            log::debug!(
                                "catalog parser: reduce #{production} -> goto {next}"
                            );
                        }
                        _ => {
                            return Err(self.syntax_error(top, pos, None));
                        }
                    }
                }
                Action::Error => {
                    return Err(self.syntax_error(state_idx, pos, None));
                }
            }
        }
    }

    fn syntax_error(&self, state: usize, pos: (u64, u64), reason: Option<String>) -> ParseError {
        ParseError::Syntax {
            line: pos.0,
            column: pos.1,
            state,
            reason: reason.unwrap_or_else(|| STATES[state].message.to_string()),
        }
    }

    /// Checks the expression buffer's element kind before a scalar joins it;
    /// `pos` is the offending token's position.
    fn merge_kind(
        &self,
        buffer: &mut Value,
        kind: ElementKind,
        state: usize,
        pos: (u64, u64),
    ) -> Result<(), ParseError> {
        if let Some(existing) = buffer.element_kind() {
            if existing != kind {
                return Err(self.syntax_error(
                    state,
                    pos,
                    Some(format!(
                        "Deduced conflicting types ('{existing}' vs '{kind}') for array element type"
                    )),
                ));
            }
        }
        buffer.tag = Some(ValueTag::Scalar(kind));
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn reduce_action(
        &self,
        production: usize,
        previous: Option<&Token>,
        kt_stack: &mut Vec<SCKeyValue>,
        finished: &mut Vec<SCKeyValue>,
        value_stack: &mut Vec<Value>,
        buffer: &mut Value,
        state: usize,
    ) -> Result<(), ParseError> {
        match production {
            // A key record is complete.
            1 | 2 | 3 => {
                if let Some(rec) = kt_stack.pop() {
                    finished.push(rec);
                }
            }
            // Prepend the newest value onto the current record's list.
            5 | 6 => {
                if let (Some(rec), Some(value)) = (kt_stack.last_mut(), value_stack.pop()) {
                    rec.values.insert(0, value);
                }
            }
            // The .se directive form: apply and drop, no tree node.
            8 => {
                let items = std::mem::take(&mut buffer.items);
                if items.len() == 3 && items[0] == "LogLevel" && items[1] == "==" {
                    if let Ok(level) = items[2].parse::<i64>() {
                        log::info!("catalog parser: log level clamped to {level}");
                        clamp_log_level(level);
                    }
                }
                *buffer = Value::default();
            }
            // A scalar value is complete.
            9 => {
                value_stack.push(std::mem::take(buffer));
            }
            // An array closes.
            10 => {
                buffer.tag = Some(ValueTag::Array(
                    buffer.element_kind().unwrap_or(ElementKind::Number),
                ));
                value_stack.push(std::mem::take(buffer));
            }
            // A matrix closes.
            11 => {
                buffer.tag = Some(ValueTag::Matrix(
                    buffer.element_kind().unwrap_or(ElementKind::Number),
                ));
                value_stack.push(std::mem::take(buffer));
            }
            // A sub-table closes: collect everything reduced inside the
            // braces, restoring source order.
            12 => {
                let mut table = SCSTable::default();
                while let Some(rec) = finished.pop() {
                    table.entries_mut().push(rec);
                }
                if let Some(rec) = kt_stack.last_mut() {
                    rec.sub_table = Some(Rc::new(table));
                }
            }
            // Scalar terminals accumulate into the buffer with homogeneity
            // enforcement.
            13 => {
                let pos = previous.map(|t| t.position).unwrap_or((1, 1));
                self.merge_kind(buffer, ElementKind::Number, state, pos)?;
                if let Some(tok) = previous {
                    buffer.items.push(tok.value.clone());
                    buffer.base = tok.base;
                    buffer.position = tok.position;
                }
            }
            14 => {
                let pos = previous.map(|t| t.position).unwrap_or((1, 1));
                self.merge_kind(buffer, ElementKind::String, state, pos)?;
                if let Some(tok) = previous {
                    buffer.items.push(tok.value.clone());
                    buffer.position = tok.position;
                }
            }
            15 => {
                buffer.tag = Some(ValueTag::Variable);
                if let Some(tok) = previous {
                    buffer.items.push(tok.value.clone());
                    buffer.position = tok.position;
                }
            }
            16 => {
                let pos = previous.map(|t| t.position).unwrap_or((1, 1));
                self.merge_kind(buffer, ElementKind::Boolean, state, pos)?;
                if let Some(tok) = previous {
                    buffer.items.push(tok.value.clone());
                    buffer.position = tok.position;
                }
            }
            // Matrix reductions: shift the nested-row map one slot and fold
            // the newest value back in.
            20 | 21 | 22 | 23 => {
                let shifted = std::mem::take(&mut buffer.sub_matrices);
                for (k, v) in shifted {
                    buffer.sub_matrices.insert(k + 1, v);
                }
                if let Some(value) = value_stack.pop() {
                    match value.tag() {
                        Some(ValueTag::Array(_)) | Some(ValueTag::Matrix(_)) => {
                            buffer.sub_matrices.entry(0).or_default().push(value);
                        }
                        _ => {
                            if let Some(kind) = value.element_kind() {
                                self.merge_kind(buffer, kind, state, value.position)?;
                            }
                            if let Some(item) = value.items.first() {
                                buffer.items.insert(0, item.clone());
                            }
                            buffer.base = value.base;
                            buffer.position = value.position;
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}
