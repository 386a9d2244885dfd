//! Smooth geom implementation

use super::{DefaultParam, DefaultParamValue, GeomAesthetics, GeomTrait, GeomType};

/// Smooth geom - a fitted conditional-mean line over x/y data.
///
/// The fit itself is performed by the output format (e.g. a Vega-Lite
/// `regression` transform); this geom only declares the layer.
#[derive(Debug, Clone, Copy)]
pub struct Smooth;

impl GeomTrait for Smooth {
    fn geom_type(&self) -> GeomType {
        GeomType::Smooth
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "y", "color", "linewidth", "linetype", "opacity"],
            required: &["x", "y"],
        }
    }

    fn default_params(&self) -> &'static [DefaultParam] {
        &[
            DefaultParam {
                name: "method",
                default: DefaultParamValue::String("lm"),
            },
            DefaultParam {
                name: "se",
                default: DefaultParamValue::Boolean(false),
            },
        ]
    }
}

impl std::fmt::Display for Smooth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "smooth")
    }
}
