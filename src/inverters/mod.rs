//! Known inverter models.
//!
//! Each model lives in its own module as a `DEFINITION` constant.

mod qvolt_hyb_g3_1p;
mod qvolt_hyb_g3_3p;
mod x1;
mod x1_boost;
mod x1_boost_g4;
mod x1_hybrid_75_d;
mod x1_hybrid_g2;
mod x1_hybrid_gen4;
mod x1_hybrid_lv;
mod x1_ies;
mod x1_mini;
mod x1_mini_g4;
mod x1_mini_v34;
mod x1_smart;
mod x3;
mod x3_evc;
mod x3_hybrid_g4;
mod x3_ies;
mod x3_mic_pro_g2;
mod x3_ultra;
mod x3_v34;
mod x_hybrid;

use crate::api::Transport;
use crate::inverter::InverterDefinition;
use std::fmt;

const QUERY_OR_BODY: &[Transport] = &[Transport::POST_QUERY, Transport::POST_BODY];
const QUERY_OR_BODY_FORWARDED: &[Transport] = &[
    Transport::POST_QUERY_FORWARDED,
    Transport::POST_BODY_FORWARDED,
];
const BODY: &[Transport] = &[Transport::POST_BODY];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    XHybrid,
    X3,
    X3V34,
    X1,
    X1Mini,
    X1MiniV34,
    X1Smart,
    QVOLTHYBG33P,
    QVOLTHYBG31P,
    X1Boost,
    X1BoostG4,
    X1HybridGen4,
    X1Hybrid75D,
    X1HybridG2,
    X1HybridLv,
    X1Ies,
    X1MiniG4,
    X3HybridG4,
    X3MicProG2,
    X3Ultra,
    X3Ies,
    X3EVC,
}

impl Model {
    /// Every registered model, in discovery order.
    pub const ALL: [Model; 22] = [
        Model::XHybrid,
        Model::X3,
        Model::X3V34,
        Model::X1,
        Model::X1Mini,
        Model::X1MiniV34,
        Model::X1Smart,
        Model::QVOLTHYBG33P,
        Model::QVOLTHYBG31P,
        Model::X1Boost,
        Model::X1BoostG4,
        Model::X1HybridGen4,
        Model::X1Hybrid75D,
        Model::X1HybridG2,
        Model::X1HybridLv,
        Model::X1Ies,
        Model::X1MiniG4,
        Model::X3HybridG4,
        Model::X3MicProG2,
        Model::X3Ultra,
        Model::X3Ies,
        Model::X3EVC,
    ];

    pub fn definition(&self) -> &'static InverterDefinition {
        match self {
            Model::XHybrid => &x_hybrid::DEFINITION,
            Model::X3 => &x3::DEFINITION,
            Model::X3V34 => &x3_v34::DEFINITION,
            Model::X1 => &x1::DEFINITION,
            Model::X1Mini => &x1_mini::DEFINITION,
            Model::X1MiniV34 => &x1_mini_v34::DEFINITION,
            Model::X1Smart => &x1_smart::DEFINITION,
            Model::QVOLTHYBG33P => &qvolt_hyb_g3_3p::DEFINITION,
            Model::QVOLTHYBG31P => &qvolt_hyb_g3_1p::DEFINITION,
            Model::X1Boost => &x1_boost::DEFINITION,
            Model::X1BoostG4 => &x1_boost_g4::DEFINITION,
            Model::X1HybridGen4 => &x1_hybrid_gen4::DEFINITION,
            Model::X1Hybrid75D => &x1_hybrid_75_d::DEFINITION,
            Model::X1HybridG2 => &x1_hybrid_g2::DEFINITION,
            Model::X1HybridLv => &x1_hybrid_lv::DEFINITION,
            Model::X1Ies => &x1_ies::DEFINITION,
            Model::X1MiniG4 => &x1_mini_g4::DEFINITION,
            Model::X3HybridG4 => &x3_hybrid_g4::DEFINITION,
            Model::X3MicProG2 => &x3_mic_pro_g2::DEFINITION,
            Model::X3Ultra => &x3_ultra::DEFINITION,
            Model::X3Ies => &x3_ies::DEFINITION,
            Model::X3EVC => &x3_evc::DEFINITION,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::Cause;
    use crate::model::Value;
    use crate::testing::read_resource;
    use serde::Deserialize;
    use std::collections::{HashMap, HashSet};

    #[derive(Deserialize)]
    struct Expected {
        serial_number: Option<String>,
        inverter_serial_number: Option<String>,
        version: Option<String>,
        data: HashMap<String, serde_json::Value>,
    }

    fn expected(model: Model) -> Expected {
        serde_json::from_str(&read_resource(&format!("{}.expected.json", model))).unwrap()
    }

    fn sample(model: Model) -> String {
        read_resource(&format!("{}.json", model))
    }

    fn values(data: HashMap<String, serde_json::Value>) -> HashMap<String, Value> {
        data.into_iter()
            .map(|(name, value)| {
                let value = match value {
                    serde_json::Value::String(s) => Value::Text(s),
                    other => Value::Number(other.as_f64().unwrap()),
                };
                (name, value)
            })
            .collect()
    }

    #[test]
    fn decodes_sample_responses() {
        for model in Model::ALL {
            let expected = expected(model);
            let response = model
                .definition()
                .handle_response(&sample(model))
                .unwrap_or_else(|e| panic!("{}: {}", model, e));

            assert_eq!(values(expected.data), response.data, "{}", model);
            assert_eq!(expected.serial_number, response.serial_number, "{}", model);
            assert_eq!(
                expected.inverter_serial_number, response.inverter_serial_number,
                "{}",
                model
            );
            assert_eq!(expected.version, response.version, "{}", model);
        }
    }

    #[test]
    fn sensor_map_matches_decoded_names() {
        for model in Model::ALL {
            let mut decoded: Vec<String> = expected(model).data.into_keys().collect();
            let mut mapped: Vec<String> = model
                .definition()
                .sensor_map()
                .into_keys()
                .map(str::to_string)
                .collect();
            decoded.sort();
            mapped.sort();
            assert_eq!(decoded, mapped, "{}", model);
        }
    }

    #[test]
    fn resets_registers_stay_internal() {
        let sensors = Model::X3V34.definition().sensor_map();
        assert_eq!(38, sensors.len());
        assert!(sensors.keys().all(|name| !name.ends_with("Resets")));
        assert_eq!(
            Some(&(89, crate::units::SensorUnit::Total(crate::units::Units::KWh))),
            sensors.get("Total PV Energy")
        );
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = Model::ALL.iter().map(Model::name).collect();
        assert_eq!(Model::ALL.len(), names.len());
        assert_eq!("X3HybridG4", Model::X3HybridG4.to_string());
    }

    #[test]
    fn manufacturers() {
        assert_eq!("Qcells", Model::QVOLTHYBG33P.definition().manufacturer);
        assert_eq!("Qcells", Model::QVOLTHYBG31P.definition().manufacturer);
        assert_eq!("Solax", Model::X1Boost.definition().manufacturer);
    }

    #[test]
    fn all_zero_data_is_rejected() {
        let mut json: serde_json::Value = serde_json::from_str(&sample(Model::X1Boost)).unwrap();
        json["data"] = serde_json::json!(vec![0; 200]);

        let result = Model::X1Boost
            .definition()
            .handle_response(&json.to_string());
        assert!(matches!(result, Err(Cause::Schema(_))));
    }

    #[test]
    fn other_models_type_is_rejected() {
        let result = Model::X1Ies
            .definition()
            .handle_response(&sample(Model::X1Hybrid75D));
        assert_eq!(
            Err(Cause::TypeMismatch {
                expected: "23".to_string(),
                received: "15".to_string(),
            }),
            result.map(|response| response.type_code)
        );
    }

    #[test]
    fn unrelated_responses_are_rejected() {
        let definition = Model::X3Ultra.definition();
        assert!(matches!(
            definition.handle_response(r#"{"bingo":"bango"}"#),
            Err(Cause::Schema(_))
        ));
        assert!(matches!(
            definition.handle_response("Not Found"),
            Err(Cause::InvalidJson { .. })
        ));
    }
}
