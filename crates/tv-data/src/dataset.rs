//! Dataset model and wire decoding.
//!
//! The service speaks two payload shapes: `ph-data` responses carry
//! isotherms keyed by enthalpy/pressure, `ts-data` responses carry isobars
//! keyed by entropy/temperature. Each shape has its own serde struct; both
//! normalize into the diagram-tagged [`DiagramDataset`] so everything
//! downstream of the decode is field-name agnostic.

use serde::Deserialize;
use tv_core::DiagramType;

use crate::error::{DataError, DataResult};

/// One constant-parameter curve of the diagram's family: an isotherm
/// (value = T in K) on ph diagrams, an isobar (value = p in bar) on ts
/// diagrams.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyCurve {
    pub value: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// One constant vapor-quality curve inside the two-phase region.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityCurve {
    pub quality: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Liquid and vapor saturation branches plus the shared second-axis array.
/// The vapor branch arrives pre-reversed from the service, so appending it
/// to the liquid branch closes the dome.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationDome {
    pub liquid: Vec<f64>,
    pub vapor: Vec<f64>,
    pub axis: Vec<f64>,
}

/// Critical-point marker, in plot coordinates for the dataset's diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    pub x: f64,
    pub y: f64,
}

/// Validated service response for one `(fluid, diagram, window)` request.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramDataset {
    pub diagram: DiagramType,
    pub family: Vec<FamilyCurve>,
    pub qualities: Vec<QualityCurve>,
    pub saturation: SaturationDome,
    pub critical: Option<CriticalPoint>,
}

// Wire shapes. Saturation branches are optional here so a missing field
// becomes an InvalidResponse instead of a generic parse failure.

#[derive(Debug, Deserialize)]
struct PhWire {
    #[serde(default)]
    isotherms: Vec<PhIsothermWire>,
    #[serde(default)]
    qualities: Vec<PhQualityWire>,
    saturation: Option<PhSaturationWire>,
    critical: Option<PhCriticalWire>,
}

#[derive(Debug, Deserialize)]
struct PhIsothermWire {
    #[serde(rename = "T")]
    t: f64,
    h: Vec<f64>,
    p: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct PhQualityWire {
    #[serde(rename = "Q")]
    q: f64,
    h: Vec<f64>,
    p: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct PhSaturationWire {
    #[serde(rename = "hL")]
    h_liquid: Option<Vec<f64>>,
    #[serde(rename = "hV")]
    h_vapor: Option<Vec<f64>>,
    p: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct PhCriticalWire {
    h: Option<f64>,
    p: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TsWire {
    #[serde(default)]
    isobars: Vec<TsIsobarWire>,
    #[serde(default)]
    qualities: Vec<TsQualityWire>,
    saturation: Option<TsSaturationWire>,
    critical: Option<TsCriticalWire>,
}

#[derive(Debug, Deserialize)]
struct TsIsobarWire {
    p: f64,
    s: Vec<f64>,
    #[serde(rename = "T")]
    t: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct TsQualityWire {
    #[serde(rename = "Q")]
    q: f64,
    s: Vec<f64>,
    #[serde(rename = "T")]
    t: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct TsSaturationWire {
    #[serde(rename = "sL")]
    s_liquid: Option<Vec<f64>>,
    #[serde(rename = "sV")]
    s_vapor: Option<Vec<f64>>,
    #[serde(rename = "T")]
    t: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct TsCriticalWire {
    s: Option<f64>,
    #[serde(rename = "T")]
    t: Option<f64>,
}

/// Decode and validate a service response body for the given diagram type.
pub fn decode_dataset(body: &str, diagram: DiagramType) -> DataResult<DiagramDataset> {
    let dataset = match diagram {
        DiagramType::PressureEnthalpy => decode_ph(body)?,
        DiagramType::TemperatureEntropy => decode_ts(body)?,
    };
    validate(&dataset)?;
    Ok(dataset)
}

fn decode_ph(body: &str) -> DataResult<DiagramDataset> {
    let wire: PhWire = serde_json::from_str(body).map_err(|_| DataError::InvalidResponse {
        what: "malformed ph-data payload",
    })?;

    let saturation = wire.saturation.ok_or(DataError::InvalidResponse {
        what: "saturation missing",
    })?;
    let liquid = saturation.h_liquid.ok_or(DataError::InvalidResponse {
        what: "saturation.hL missing",
    })?;
    let vapor = saturation.h_vapor.ok_or(DataError::InvalidResponse {
        what: "saturation.hV missing",
    })?;
    let axis = saturation.p.ok_or(DataError::InvalidResponse {
        what: "saturation.p missing",
    })?;

    Ok(DiagramDataset {
        diagram: DiagramType::PressureEnthalpy,
        family: wire
            .isotherms
            .into_iter()
            .map(|iso| FamilyCurve {
                value: iso.t,
                x: iso.h,
                y: iso.p,
            })
            .collect(),
        qualities: wire
            .qualities
            .into_iter()
            .map(|line| QualityCurve {
                quality: line.q,
                x: line.h,
                y: line.p,
            })
            .collect(),
        saturation: SaturationDome {
            liquid,
            vapor,
            axis,
        },
        critical: wire
            .critical
            .and_then(|c| Some(CriticalPoint { x: c.h?, y: c.p? })),
    })
}

fn decode_ts(body: &str) -> DataResult<DiagramDataset> {
    let wire: TsWire = serde_json::from_str(body).map_err(|_| DataError::InvalidResponse {
        what: "malformed ts-data payload",
    })?;

    let saturation = wire.saturation.ok_or(DataError::InvalidResponse {
        what: "saturation missing",
    })?;
    let liquid = saturation.s_liquid.ok_or(DataError::InvalidResponse {
        what: "saturation.sL missing",
    })?;
    let vapor = saturation.s_vapor.ok_or(DataError::InvalidResponse {
        what: "saturation.sV missing",
    })?;
    let axis = saturation.t.ok_or(DataError::InvalidResponse {
        what: "saturation.T missing",
    })?;

    Ok(DiagramDataset {
        diagram: DiagramType::TemperatureEntropy,
        family: wire
            .isobars
            .into_iter()
            .map(|iso| FamilyCurve {
                value: iso.p,
                x: iso.s,
                y: iso.t,
            })
            .collect(),
        qualities: wire
            .qualities
            .into_iter()
            .map(|line| QualityCurve {
                quality: line.q,
                x: line.s,
                y: line.t,
            })
            .collect(),
        saturation: SaturationDome {
            liquid,
            vapor,
            axis,
        },
        critical: wire
            .critical
            .and_then(|c| Some(CriticalPoint { x: c.s?, y: c.t? })),
    })
}

fn validate(dataset: &DiagramDataset) -> DataResult<()> {
    let dome = &dataset.saturation;
    if dome.liquid.len() != dome.vapor.len() {
        return Err(DataError::InvalidResponse {
            what: "saturation branches differ in length",
        });
    }
    if dome.axis.len() != dome.liquid.len() {
        return Err(DataError::InvalidResponse {
            what: "saturation axis length mismatch",
        });
    }

    for curve in &dataset.family {
        if curve.x.len() != curve.y.len() {
            return Err(DataError::InvalidResponse {
                what: "family curve axis length mismatch",
            });
        }
    }
    for line in &dataset.qualities {
        if line.x.len() != line.y.len() {
            return Err(DataError::InvalidResponse {
                what: "quality curve axis length mismatch",
            });
        }
        if !(0.0..=1.0).contains(&line.quality) {
            return Err(DataError::InvalidResponse {
                what: "quality outside [0, 1]",
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PH_BODY: &str = r#"{
        "isotherms": [
            {"T": 200.0, "h": [50.0, 60.0], "p": [1.0, 2.0]},
            {"T": 300.0, "h": [80.0, 90.0], "p": [1.0, 2.0]}
        ],
        "qualities": [
            {"Q": 0.5, "h": [55.0, 65.0], "p": [1.5, 2.5]}
        ],
        "saturation": {"hL": [1.0, 2.0], "hV": [4.0, 3.0], "p": [10.0, 20.0]},
        "critical": {"h": 120.0, "p": 58.0}
    }"#;

    #[test]
    fn decodes_valid_ph_payload() {
        let dataset = decode_dataset(PH_BODY, DiagramType::PressureEnthalpy).unwrap();
        assert_eq!(dataset.diagram, DiagramType::PressureEnthalpy);
        assert_eq!(dataset.family.len(), 2);
        assert_eq!(dataset.family[0].value, 200.0);
        assert_eq!(dataset.family[0].x, vec![50.0, 60.0]);
        assert_eq!(dataset.qualities.len(), 1);
        assert_eq!(dataset.saturation.liquid, vec![1.0, 2.0]);
        assert_eq!(dataset.saturation.vapor, vec![4.0, 3.0]);
        assert_eq!(
            dataset.critical,
            Some(CriticalPoint { x: 120.0, y: 58.0 })
        );
    }

    #[test]
    fn decodes_valid_ts_payload() {
        let body = r#"{
            "isobars": [
                {"p": 5.0, "s": [1.0, 1.2], "T": [250.0, 260.0]}
            ],
            "qualities": [],
            "saturation": {"sL": [0.5, 0.6], "sV": [1.8, 1.7], "T": [200.0, 210.0]}
        }"#;
        let dataset = decode_dataset(body, DiagramType::TemperatureEntropy).unwrap();
        assert_eq!(dataset.diagram, DiagramType::TemperatureEntropy);
        assert_eq!(dataset.family[0].value, 5.0);
        assert_eq!(dataset.critical, None);
    }

    #[test]
    fn missing_vapor_branch_is_invalid() {
        let body = r#"{
            "isotherms": [],
            "qualities": [],
            "saturation": {"hL": [1.0, 2.0], "p": [10.0, 20.0]}
        }"#;
        let err = decode_dataset(body, DiagramType::PressureEnthalpy).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidResponse {
                what: "saturation.hV missing"
            }
        ));
    }

    #[test]
    fn missing_saturation_is_invalid() {
        let body = r#"{"isotherms": [], "qualities": []}"#;
        let err = decode_dataset(body, DiagramType::PressureEnthalpy).unwrap_err();
        assert!(matches!(err, DataError::InvalidResponse { .. }));
    }

    #[test]
    fn branch_length_mismatch_is_invalid() {
        let body = r#"{
            "isotherms": [],
            "qualities": [],
            "saturation": {"hL": [1.0, 2.0, 3.0], "hV": [4.0, 3.0], "p": [10.0, 20.0]}
        }"#;
        let err = decode_dataset(body, DiagramType::PressureEnthalpy).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidResponse {
                what: "saturation branches differ in length"
            }
        ));
    }

    #[test]
    fn family_curve_length_mismatch_is_invalid() {
        let body = r#"{
            "isotherms": [{"T": 200.0, "h": [50.0, 60.0], "p": [1.0]}],
            "qualities": [],
            "saturation": {"hL": [], "hV": [], "p": []}
        }"#;
        let err = decode_dataset(body, DiagramType::PressureEnthalpy).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidResponse {
                what: "family curve axis length mismatch"
            }
        ));
    }

    #[test]
    fn quality_out_of_range_is_invalid() {
        let body = r#"{
            "isotherms": [],
            "qualities": [{"Q": 1.5, "h": [], "p": []}],
            "saturation": {"hL": [], "hV": [], "p": []}
        }"#;
        let err = decode_dataset(body, DiagramType::PressureEnthalpy).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidResponse {
                what: "quality outside [0, 1]"
            }
        ));
    }

    #[test]
    fn null_critical_fields_drop_the_marker() {
        let body = r#"{
            "isotherms": [],
            "qualities": [],
            "saturation": {"hL": [], "hV": [], "p": []},
            "critical": {"h": null, "p": null}
        }"#;
        let dataset = decode_dataset(body, DiagramType::PressureEnthalpy).unwrap();
        assert_eq!(dataset.critical, None);
    }

    #[test]
    fn malformed_json_is_invalid_response() {
        let err = decode_dataset("not json", DiagramType::PressureEnthalpy).unwrap_err();
        assert!(matches!(err, DataError::InvalidResponse { .. }));
    }
}
