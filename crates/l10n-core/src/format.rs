use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::iter::Peekable;
use core::str::Chars;

const MAX_WIDTH: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    pub fn display(value: impl fmt::Display) -> Self {
        Arg::Str(value.to_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = render(&Directive::default(), 'v', self).unwrap_or_default();
        f.write_str(&text)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )*
    };
}

arg_from!(Int as i64: i8, i16, i32, i64, isize);
arg_from!(Uint as u64: u8, u16, u32, u64, usize);
arg_from!(Float as f64: f32, f64);

#[derive(Clone, Copy, Debug, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Mismatches are written inline: `%!d(MISSING)`, `%!d(string=abc)`,
/// `%!(NOVERB)`, `%!(EXTRA int=1)`.
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let directive = parse_directive(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next) else {
            out.push_str(&format!("%!{verb}(MISSING)"));
            continue;
        };
        next += 1;

        match render(&directive, verb, arg) {
            Some(text) => out.push_str(&text),
            None => out.push_str(&format!("%!{verb}({}={arg})", arg.type_name())),
        }
    }

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (idx, arg) in args[next..].iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{}={arg}", arg.type_name()));
        }
        out.push(')');
    }

    out
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let mut directive = Directive::default();
    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => directive.minus = true,
            '+' => directive.plus = true,
            ' ' => directive.space = true,
            '0' => directive.zero = true,
            '#' => directive.sharp = true,
            _ => break,
        }
        chars.next();
    }
    directive.width = read_number(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        directive.precision = Some(read_number(chars).unwrap_or(0));
    }
    directive
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        let current = value.unwrap_or(0);
        value = Some((current * 10 + digit as usize).min(MAX_WIDTH));
    }
    value
}

fn render(directive: &Directive, verb: char, arg: &Arg) -> Option<String> {
    match (verb, arg) {
        ('v' | 's', Arg::Str(text)) => {
            Some(pad_text(directive, truncate(directive, text).to_string()))
        }
        ('v' | 's', Arg::Char(ch)) => Some(pad_text(directive, ch.to_string())),
        ('q', Arg::Str(text)) => {
            Some(pad_text(directive, format!("{:?}", truncate(directive, text))))
        }
        ('q', Arg::Char(ch)) => Some(pad_text(directive, format!("{ch:?}"))),
        ('v' | 't', Arg::Bool(value)) => Some(pad_text(directive, value.to_string())),
        ('v' | 'd', Arg::Int(value)) => {
            Some(integer(directive, 'd', *value < 0, value.unsigned_abs()))
        }
        ('v' | 'd', Arg::Uint(value)) => Some(integer(directive, 'd', false, *value)),
        ('d', Arg::Char(ch)) => {
            Some(integer(directive, 'd', false, u64::from(u32::from(*ch))))
        }
        ('b' | 'o' | 'x' | 'X', Arg::Int(value)) => {
            Some(integer(directive, verb, *value < 0, value.unsigned_abs()))
        }
        ('b' | 'o' | 'x' | 'X', Arg::Uint(value)) => {
            Some(integer(directive, verb, false, *value))
        }
        ('x' | 'X', Arg::Str(text)) => {
            Some(pad_text(directive, hex_bytes(verb, text.as_bytes())))
        }
        ('c', Arg::Char(ch)) => Some(pad_text(directive, ch.to_string())),
        ('c', Arg::Int(value)) => Some(pad_text(directive, code_point(*value))),
        ('c', Arg::Uint(value)) => Some(pad_text(directive, code_point(*value))),
        ('v' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G', Arg::Float(value)) => {
            Some(float(directive, verb, *value))
        }
        _ => None,
    }
}

fn truncate<'a>(directive: &Directive, text: &'a str) -> &'a str {
    match directive.precision {
        Some(limit) => match text.char_indices().nth(limit) {
            Some((end, _)) => &text[..end],
            None => text,
        },
        None => text,
    }
}

fn code_point<T: TryInto<u32>>(value: T) -> String {
    value
        .try_into()
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

fn hex_bytes(verb: char, bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        if verb == 'X' {
            out.push_str(&format!("{byte:02X}"));
        } else {
            out.push_str(&format!("{byte:02x}"));
        }
    }
    out
}

fn sign(directive: &Directive, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if directive.plus {
        "+"
    } else if directive.space {
        " "
    } else {
        ""
    }
}

fn integer(directive: &Directive, verb: char, negative: bool, magnitude: u64) -> String {
    let mut digits = match verb {
        'b' => format!("{magnitude:b}"),
        'o' => format!("{magnitude:o}"),
        'x' => format!("{magnitude:x}"),
        'X' => format!("{magnitude:X}"),
        _ => magnitude.to_string(),
    };
    if let Some(precision) = directive.precision {
        while digits.len() < precision {
            digits.insert(0, '0');
        }
    }
    let prefix = match (directive.sharp, verb) {
        (true, 'b') => "0b",
        (true, 'o') if !digits.starts_with('0') => "0",
        (true, 'x') => "0x",
        (true, 'X') => "0X",
        _ => "",
    };
    let head = format!("{}{prefix}", sign(directive, negative));
    pad_number(directive, head, digits)
}

fn float(directive: &Directive, verb: char, value: f64) -> String {
    if value.is_nan() {
        return pad_text(directive, String::from("NaN"));
    }
    let head = String::from(sign(directive, value.is_sign_negative()));
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return pad_text(directive, format!("{head}Inf"));
    }

    let body = match verb {
        'f' | 'F' => format!("{:.*}", directive.precision.unwrap_or(6), magnitude),
        'e' | 'E' => exponent(magnitude, directive.precision.unwrap_or(6), verb == 'E'),
        'g' | 'G' => general(magnitude, directive.precision, 6, verb == 'G'),
        _ => general(magnitude, directive.precision, 21, false),
    };
    pad_number(directive, head, body)
}

fn exponent(magnitude: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, magnitude);
    rewrite_exponent(&raw, upper)
}

// 1.5e3 -> 1.5e+03
fn rewrite_exponent(raw: &str, upper: bool) -> String {
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let marker = if upper { 'E' } else { 'e' };
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{exp_sign}{:02}", exp.unsigned_abs())
}

fn decimal_exponent(magnitude: f64) -> i32 {
    let raw = format!("{magnitude:e}");
    raw.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn general(magnitude: f64, precision: Option<usize>, shortest_limit: i32, upper: bool) -> String {
    match precision {
        None => {
            let exp = decimal_exponent(magnitude);
            if magnitude != 0.0 && (exp < -4 || exp >= shortest_limit) {
                rewrite_exponent(&format!("{magnitude:e}"), upper)
            } else {
                magnitude.to_string()
            }
        }
        Some(precision) => {
            let significant = precision.max(1);
            let rounded = format!("{:.*e}", significant - 1, magnitude);
            let exp = rounded
                .split_once('e')
                .and_then(|(_, exp)| exp.parse::<i32>().ok())
                .unwrap_or(0);
            if exp < -4 || exp >= significant as i32 {
                let (mantissa, _) = rounded.split_once('e').unwrap_or((rounded.as_str(), ""));
                let mantissa = trim_fraction(mantissa);
                rewrite_exponent(&format!("{mantissa}e{exp}"), upper)
            } else {
                let decimals = (significant as i32 - 1 - exp).max(0) as usize;
                trim_fraction(&format!("{:.*}", decimals, magnitude)).to_string()
            }
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn pad_text(directive: &Directive, body: String) -> String {
    let width = directive.width.unwrap_or(0);
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = " ".repeat(width - len);
    if directive.minus {
        body + &fill
    } else {
        fill + &body
    }
}

fn pad_number(directive: &Directive, head: String, digits: String) -> String {
    let width = directive.width.unwrap_or(0);
    let len = head.chars().count() + digits.chars().count();
    if len >= width {
        return head + &digits;
    }
    let fill = width - len;
    if directive.minus {
        format!("{head}{digits}{}", " ".repeat(fill))
    } else if directive.zero && directive.precision.is_none() {
        format!("{head}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{head}{digits}", " ".repeat(fill))
    }
}
