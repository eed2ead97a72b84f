//! The `"tft"` primitive set
//!
//! The VM looks primitives up by set and name and calls them with a slice of
//! tagged values. [`call`] decodes those values and forwards to the matching
//! [`TftSurface`] method. Decoding is strict for ints and strings and lenient
//! for flags: a flag is set only by `Bool(true)`, anything else reads as
//! false.

use core::fmt;

use platform::PanelDriver;
use thiserror_no_std::Error;

use crate::color::Color24;
use crate::surface::TftSurface;

/// Name the primitive set registers under
pub const PRIMITIVE_SET: &str = "tft";

/// One registered primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrimEntry {
    /// Name the VM calls it by
    pub name: &'static str,
    /// Number of arguments
    pub arity: usize,
}

/// Registered primitives, in registration order
pub const PRIMITIVES: [PrimEntry; 6] = [
    PrimEntry { name: "enableDisplay", arity: 1 },
    PrimEntry { name: "setPixel", arity: 3 },
    PrimEntry { name: "line", arity: 5 },
    PrimEntry { name: "rect", arity: 6 },
    PrimEntry { name: "circle", arity: 5 },
    PrimEntry { name: "text", arity: 6 },
];

/// A VM argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Small integer: coordinates, sizes, `0xRRGGBB` colors
    Int(i32),
    /// Boolean
    Bool(bool),
    /// String
    Str(&'a str),
}

impl Value<'_> {
    fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::Int,
            Self::Bool(_) => ArgKind::Bool,
            Self::Str(_) => ArgKind::Str,
        }
    }
}

/// Expected argument kind, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgKind {
    /// [`Value::Int`]
    Int,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Str`]
    Str,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "integer"),
            Self::Bool => write!(f, "boolean"),
            Self::Str => write!(f, "string"),
        }
    }
}

/// Primitive call errors
///
/// The VM treats every variant except `Driver` as a programming error in
/// the calling bytecode.
#[derive(Debug, Error)]
pub enum PrimError<E: fmt::Debug> {
    /// No primitive of that name in the set
    #[error("unknown primitive {0:?} in set \"tft\"")]
    UnknownPrimitive(heapless::String<24>),

    /// Wrong number of arguments
    #[error("expected {expected} arguments, got {got}")]
    ArgCount {
        /// Arity of the primitive
        expected: usize,
        /// Arguments supplied
        got: usize,
    },

    /// Argument of the wrong kind
    #[error("argument {index}: expected {expected}, got {got}")]
    TypeMismatch {
        /// Zero-based argument position
        index: usize,
        /// Kind the primitive needs
        expected: ArgKind,
        /// Kind supplied
        got: ArgKind,
    },

    /// The panel driver failed
    #[error("panel driver error: {0:?}")]
    Driver(E),
}

/// Look up a primitive by name
pub fn lookup(name: &str) -> Option<PrimEntry> {
    PRIMITIVES.iter().copied().find(|entry| entry.name == name)
}

/// Decode `args` and run primitive `name` on `surface`
pub fn call<D: PanelDriver>(
    surface: &mut TftSurface<D>,
    name: &str,
    args: &[Value<'_>],
) -> Result<(), PrimError<D::Error>> {
    let Some(entry) = lookup(name) else {
        tracing::warn!(primitive = name, "unknown tft primitive");
        return Err(PrimError::UnknownPrimitive(truncated(name)));
    };
    if args.len() != entry.arity {
        return Err(PrimError::ArgCount {
            expected: entry.arity,
            got: args.len(),
        });
    }
    tracing::trace!(primitive = entry.name, "tft primitive");
    let a = Args(args);

    let result = match entry.name {
        "enableDisplay" => surface.enable_display(a.flag(0)),
        "setPixel" => surface.set_pixel(a.int(0)?, a.int(1)?, a.color(2)?),
        "line" => surface.line(a.int(0)?, a.int(1)?, a.int(2)?, a.int(3)?, a.color(4)?),
        "rect" => surface.rect(
            a.int(0)?,
            a.int(1)?,
            a.int(2)?,
            a.int(3)?,
            a.color(4)?,
            a.flag(5),
        ),
        "circle" => surface.circle(a.int(0)?, a.int(1)?, a.int(2)?, a.color(3)?, a.flag(4)),
        "text" => surface.text(
            a.str(0)?,
            a.int(1)?,
            a.int(2)?,
            a.color(3)?,
            a.int(4)?,
            a.flag(5),
        ),
        _ => return Err(PrimError::UnknownPrimitive(truncated(name))),
    };
    result.map_err(PrimError::Driver)
}

/// Arity-checked argument slice
struct Args<'s, 'a>(&'s [Value<'a>]);

impl<'a> Args<'_, 'a> {
    fn int<E: fmt::Debug>(&self, index: usize) -> Result<i32, PrimError<E>> {
        match self.0.get(index) {
            Some(Value::Int(v)) => Ok(*v),
            other => Err(mismatch(index, ArgKind::Int, other)),
        }
    }

    fn str<E: fmt::Debug>(&self, index: usize) -> Result<&'a str, PrimError<E>> {
        match self.0.get(index) {
            Some(Value::Str(s)) => Ok(*s),
            other => Err(mismatch(index, ArgKind::Str, other)),
        }
    }

    fn color<E: fmt::Debug>(&self, index: usize) -> Result<Color24, PrimError<E>> {
        // Reinterpret the bits; only the low 24 are used.
        self.int(index)
            .map(|v| Color24(v.cast_unsigned()))
    }

    fn flag(&self, index: usize) -> bool {
        matches!(self.0.get(index), Some(Value::Bool(true)))
    }
}

fn mismatch<E: fmt::Debug>(index: usize, expected: ArgKind, got: Option<&Value<'_>>) -> PrimError<E> {
    match got {
        Some(value) => PrimError::TypeMismatch {
            index,
            expected,
            got: value.kind(),
        },
        // Unreachable after the arity check; report it as a count error.
        None => PrimError::ArgCount {
            expected: index.saturating_add(1),
            got: index,
        },
    }
}

fn truncated(name: &str) -> heapless::String<24> {
    let mut out = heapless::String::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use platform::mocks::{PanelCall, RecordingPanel};
    use platform::Color16;

    fn surface() -> TftSurface<RecordingPanel> {
        TftSurface::new(RecordingPanel::new(128, 128), SessionConfig::default())
    }

    #[test]
    fn test_registration_order() {
        let names: Vec<&str> = PRIMITIVES.iter().map(|p| p.name).collect();
        assert_eq!(names, ["enableDisplay", "setPixel", "line", "rect", "circle", "text"]);
        assert_eq!(PRIMITIVE_SET, "tft");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("rect").map(|p| p.arity), Some(6));
        assert_eq!(lookup("Rect"), None);
    }

    #[test]
    fn test_enable_requires_bool_true() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Int(1)]).unwrap();
        assert!(!tft.is_enabled());
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        assert!(tft.is_enabled());
    }

    #[test]
    fn test_line_dispatch() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        let args = [
            Value::Int(0),
            Value::Int(7),
            Value::Int(30),
            Value::Int(7),
            Value::Int(0x00FF00),
        ];
        call(&mut tft, "line", &args).unwrap();
        assert_eq!(
            tft.driver().last_call(),
            Some(&PanelCall::HLine { x: 0, y: 7, len: 30, color: Color16::GREEN })
        );
    }

    #[test]
    fn test_rect_fill_flag_is_lenient() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        let mut args = [
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4),
            Value::Int(0),
            Value::Int(1),
        ];
        call(&mut tft, "rect", &args).unwrap();
        assert!(matches!(tft.driver().last_call(), Some(PanelCall::DrawRect { .. })));
        args[5] = Value::Bool(true);
        call(&mut tft, "rect", &args).unwrap();
        assert!(matches!(tft.driver().last_call(), Some(PanelCall::FillRect { .. })));
    }

    #[test]
    fn test_text_dispatch() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        let args = [
            Value::Str("hello"),
            Value::Int(0),
            Value::Int(0),
            Value::Int(0xFFFFFF),
            Value::Int(1),
            Value::Bool(false),
        ];
        call(&mut tft, "text", &args).unwrap();
        assert_eq!(
            tft.driver().last_call(),
            Some(&PanelCall::Print("hello".try_into().unwrap()))
        );
    }

    #[test]
    fn test_negative_color_uses_low_24_bits() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        call(&mut tft, "setPixel", &[Value::Int(0), Value::Int(0), Value::Int(-1)]).unwrap();
        assert_eq!(
            tft.driver().last_call(),
            Some(&PanelCall::Pixel { x: 0, y: 0, color: Color16::WHITE })
        );
    }

    #[test]
    fn test_color_bits_are_reinterpreted() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        for (raw, expected) in [
            (i32::MIN, Color16::BLACK),
            (-0x0100_0000 | 0xFF0000, Color16(0xF800)),
            (i32::MAX, Color16::WHITE),
        ] {
            call(&mut tft, "setPixel", &[Value::Int(1), Value::Int(1), Value::Int(raw)]).unwrap();
            assert_eq!(
                tft.driver().last_call(),
                Some(&PanelCall::Pixel { x: 1, y: 1, color: expected }),
                "{raw:#x}"
            );
        }
    }

    #[test]
    fn test_unknown_primitive() {
        let mut tft = surface();
        let err = call(&mut tft, "sprite", &[]).unwrap_err();
        assert!(matches!(err, PrimError::UnknownPrimitive(ref n) if n.as_str() == "sprite"));
    }

    #[test]
    fn test_wrong_arity() {
        let mut tft = surface();
        let err = call(&mut tft, "setPixel", &[Value::Int(0)]).unwrap_err();
        assert!(matches!(err, PrimError::ArgCount { expected: 3, got: 1 }));
    }

    #[test]
    fn test_wrong_type() {
        let mut tft = surface();
        let err = call(&mut tft, "setPixel", &[Value::Int(0), Value::Str("y"), Value::Int(0)])
            .unwrap_err();
        assert!(matches!(
            err,
            PrimError::TypeMismatch { index: 1, expected: ArgKind::Int, got: ArgKind::Str }
        ));
        assert_eq!(err.to_string(), "argument 1: expected integer, got string");
    }

    #[test]
    fn test_type_errors_leave_driver_untouched() {
        let mut tft = surface();
        call(&mut tft, "enableDisplay", &[Value::Bool(true)]).unwrap();
        let before = tft.driver().calls().len();
        let _ = call(&mut tft, "circle", &[Value::Bool(true); 5]);
        assert_eq!(tft.driver().calls().len(), before);
    }
}
