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

//! Parameter expansion

use super::{expand_word, Error, ErrorCause, Result};
use crate::pattern;
use mrsh_env::Env;
use mrsh_syntax::syntax::{Modifier, Param, Switch, SwitchCondition, SwitchType, Trim};

/// Message of `${x:?}` without an explicit word
const DEFAULT_VACANT_MESSAGE: &str = "parameter null or not set";

/// Resolves the raw value of a parameter.
///
/// Special parameters resolve to fixed shell state; anything else is looked
/// up in the environment. Positional parameters are not supported and
/// resolve as unset.
fn resolve(env: &Env, name: &str) -> Option<String> {
    match name {
        "?" => Some(env.exit_status.to_string()),
        "$" | "!" => Some("1".to_string()),
        "-" => Some(String::new()),
        "#" => Some("0".to_string()),
        "*" | "@" => Some(String::new()),
        "0" => Some(env.program_name.clone()),
        _ if name.chars().all(|c| c.is_ascii_digit()) => None,
        _ => env.variables.get(name).map(str::to_string),
    }
}

/// Performs parameter expansion.
pub(super) async fn expand(env: &mut Env, param: &Param) -> Result {
    let value = resolve(env, &param.name);

    match &param.modifier {
        Modifier::None => Ok(value.unwrap_or_default()),

        Modifier::Length => {
            let length = value.unwrap_or_default().chars().count();
            Ok(length.to_string())
        }

        Modifier::Switch(switch) => apply_switch(env, param, switch, value).await,

        Modifier::Trim(trim) => apply_trim(env, trim, value).await,
    }
}

/// Returns true if the switch should substitute: the parameter is unset,
/// or it is empty and the condition has a colon.
fn is_vacant(value: &Option<String>, condition: SwitchCondition) -> bool {
    match (value, condition) {
        (None, _) => true,
        (Some(v), SwitchCondition::UnsetOrEmpty) => v.is_empty(),
        (Some(_), SwitchCondition::Unset) => false,
    }
}

async fn apply_switch(
    env: &mut Env,
    param: &Param,
    switch: &Switch,
    value: Option<String>,
) -> Result {
    let vacant = is_vacant(&value, switch.condition);
    match switch.r#type {
        SwitchType::Default => {
            if vacant {
                expand_word(env, &switch.word).await
            } else {
                Ok(value.unwrap_or_default())
            }
        }
        SwitchType::Assign => {
            if vacant {
                let substitute = expand_word(env, &switch.word).await?;
                env.variables.assign(param.name.clone(), substitute.clone());
                Ok(substitute)
            } else {
                Ok(value.unwrap_or_default())
            }
        }
        SwitchType::Error => {
            if vacant {
                let message = expand_word(env, &switch.word).await?;
                let message = if message.is_empty() {
                    DEFAULT_VACANT_MESSAGE.to_string()
                } else {
                    message
                };
                Err(Error {
                    cause: ErrorCause::VacantParameter {
                        name: param.name.clone(),
                        message,
                    },
                    position: param.position,
                })
            } else {
                Ok(value.unwrap_or_default())
            }
        }
        SwitchType::Alter => {
            if vacant {
                Ok(String::new())
            } else {
                expand_word(env, &switch.word).await
            }
        }
    }
}

async fn apply_trim(env: &mut Env, trim: &Trim, value: Option<String>) -> Result {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let pattern = expand_word(env, &trim.pattern).await?;
    Ok(pattern::trim(&value, &pattern, trim.side, trim.length))
}
