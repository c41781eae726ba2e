//! Canonical rendering.
//!
//! `MediaQuery` renders as a full `@media ...` header. At the root, `or`
//! becomes a comma-separated list and `and` groups stay bare; below the
//! root, `or` is spelled out and compound operands are parenthesized. A
//! negated media type below the root is parenthesized too.

use crate::{MediaQuery, MediaQueryRule, PairValue};
use std::fmt;

impl fmt::Display for PairValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairValue::Dimension { value, unit } => write!(f, "{value}{unit}"),
            PairValue::Number(value) => write!(f, "{value}"),
            PairValue::Ident(ident) => f.write_str(ident),
            PairValue::Fraction(numerator, denominator) => {
                write!(f, "{numerator} / {denominator}")
            }
            PairValue::Calc(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for MediaQueryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rule(f, self, false)
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("@media ")?;
        write_rule(f, self.queries(), true)
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, rule: &MediaQueryRule, top_level: bool) -> fmt::Result {
    match rule {
        MediaQueryRule::Keyword { key, not, only } => {
            // Inside parentheses a leading `not` would read as `(not <condition>)`.
            let wrapped = *not && !top_level;
            if wrapped {
                f.write_str("(")?;
            }
            if *not {
                f.write_str("not ")?;
            }
            if *only {
                f.write_str("only ")?;
            }
            f.write_str(key.as_str())?;
            if wrapped {
                f.write_str(")")?;
            }
            Ok(())
        }
        MediaQueryRule::Word(feature) => write!(f, "({})", feature.as_str()),
        MediaQueryRule::Pair { key, value } => write!(f, "({key}: {value})"),
        MediaQueryRule::Not(inner) => match inner.as_ref() {
            MediaQueryRule::And(_) | MediaQueryRule::Or(_) => {
                f.write_str("(not (")?;
                write_rule(f, inner, false)?;
                f.write_str("))")
            }
            _ => {
                f.write_str("(not ")?;
                write_rule(f, inner, false)?;
                f.write_str(")")
            }
        },
        MediaQueryRule::And(rules) => {
            for (index, rule) in rules.iter().enumerate() {
                if index > 0 {
                    f.write_str(" and ")?;
                }
                if matches!(rule, MediaQueryRule::Or(_)) {
                    f.write_str("(")?;
                    write_rule(f, rule, false)?;
                    f.write_str(")")?;
                } else {
                    write_rule(f, rule, top_level)?;
                }
            }
            Ok(())
        }
        MediaQueryRule::Or(rules) => {
            let live: Vec<&MediaQueryRule> = rules.iter().filter(|rule| !rule.is_nothing()).collect();
            match live.as_slice() {
                [] => f.write_str("not all"),
                [single] => write_rule(f, single, top_level),
                _ if top_level => {
                    for (index, rule) in live.iter().enumerate() {
                        if index > 0 {
                            f.write_str(", ")?;
                        }
                        write_rule(f, rule, true)?;
                    }
                    Ok(())
                }
                _ => {
                    for (index, rule) in live.iter().enumerate() {
                        if index > 0 {
                            f.write_str(" or ")?;
                        }
                        if matches!(rule, MediaQueryRule::And(_) | MediaQueryRule::Or(_)) {
                            f.write_str("(")?;
                            write_rule(f, rule, false)?;
                            f.write_str(")")?;
                        } else {
                            write_rule(f, rule, false)?;
                        }
                    }
                    Ok(())
                }
            }
        }
    }
}
