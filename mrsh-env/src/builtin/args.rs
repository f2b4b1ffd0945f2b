// This file is part of mrsh, an embeddable POSIX-style command interpreter.
// Copyright (C) 2026 the mrsh authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command-line argument parser
//!
//! This module parses the expanded arguments of a command invocation
//! against the command's [parameter schema](super::ParamSpec):
//!
//! - `--name=value` sets option `name` to `value`.
//! - `--name` sets a boolean option to true; any other type consumes the
//!   next argument as the value.
//! - `-x` resolves the character through the command's short aliases or an
//!   option's declared short form; an undeclared character is recorded as a
//!   boolean anyway.
//! - Anything else is an operand.
//!
//! After parsing, defaults are applied and the result is validated; a
//! failure is reported as a usage error (exit status 2).

use super::{Builtin, ParamSpec, ParamType, Params, Value};
use thiserror::Error;

/// Error in command-line argument parsing or validation
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// An option was named that the command does not declare.
    #[error("--{0}: unknown option")]
    UnknownOption(String),
    /// A non-boolean option appeared last with no value to consume.
    #[error("--{0}: the option requires a value")]
    MissingValue(String),
    /// A numeric option was given a non-numeric value.
    #[error("--{name}: {value:?} is not a number")]
    InvalidNumber { name: String, value: String },
    /// A required option was not supplied.
    #[error("--{0}: the option is required")]
    MissingRequired(String),
}

fn find_spec<'a>(specs: &'a [ParamSpec], name: &str) -> Option<&'a ParamSpec> {
    specs.iter().find(|spec| spec.name == name)
}

/// Records a raw value for an option, coercing it to the declared type.
fn set_value(params: &mut Params, spec: &ParamSpec, raw: &str) -> Result<(), Error> {
    match spec.r#type {
        ParamType::Bool => {
            let value = !matches!(raw, "false" | "0");
            params.set(&spec.name, Value::Bool(value));
        }
        ParamType::Str => params.set(&spec.name, Value::Str(raw.to_string())),
        ParamType::Num => {
            let value = raw.parse().map_err(|_| Error::InvalidNumber {
                name: spec.name.clone(),
                value: raw.to_string(),
            })?;
            params.set(&spec.name, Value::Num(value));
        }
        ParamType::List => params.push_list(&spec.name, raw.to_string()),
    }
    Ok(())
}

/// Parses the arguments of one command invocation against its schema.
pub fn parse_arguments(builtin: &Builtin, args: &[String]) -> Result<Params, Error> {
    let specs = &builtin.params;
    let mut params = Params::default();
    let mut args = args.iter();
    let mut options_done = false;

    while let Some(arg) = args.next() {
        if options_done {
            params.operands.push(arg.clone());
            continue;
        }

        if arg == "--" {
            options_done = true;
        } else if let Some(rest) = arg.strip_prefix("--").filter(|rest| !rest.is_empty()) {
            let (name, value) = match rest.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (rest, None),
            };
            let spec =
                find_spec(specs, name).ok_or_else(|| Error::UnknownOption(name.to_string()))?;
            match value {
                Some(value) => set_value(&mut params, spec, &value)?,
                None if spec.r#type == ParamType::Bool => {
                    params.set(&spec.name, Value::Bool(true));
                }
                None => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::MissingValue(spec.name.clone()))?;
                    set_value(&mut params, spec, value)?;
                }
            }
        } else if let Some(short) = single_dash_char(arg) {
            let canonical = builtin
                .short_aliases
                .iter()
                .find(|(c, _)| *c == short)
                .map(|(_, name)| name.as_str());
            let spec = match canonical {
                Some(name) => find_spec(specs, name),
                None => specs.iter().find(|spec| spec.short == Some(short)),
            };
            match spec {
                Some(spec) if spec.r#type == ParamType::Bool => {
                    params.set(&spec.name, Value::Bool(true));
                }
                Some(spec) => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::MissingValue(spec.name.clone()))?;
                    set_value(&mut params, spec, value)?;
                }
                // An undeclared flag is recorded so the handler can see it.
                None => params.set(&short.to_string(), Value::Bool(true)),
            }
        } else {
            params.operands.push(arg.clone());
        }
    }

    for spec in specs {
        if params.get(&spec.name).is_none() {
            if let Some(default) = &spec.default {
                params.set(&spec.name, default.clone());
            } else if spec.required {
                return Err(Error::MissingRequired(spec.name.clone()));
            }
        }
    }

    Ok(params)
}

/// Returns the character of a `-x` argument, or `None` for any other shape.
fn single_dash_char(arg: &str) -> Option<char> {
    let rest = arg.strip_prefix('-')?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' => Some(c),
        _ => None,
    }
}
