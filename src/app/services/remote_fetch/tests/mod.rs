//! Tests for the web service layer; nothing here touches the network

use serde_json::json;

use super::records::Record;


/// Two index samples one minute apart, as the service returns them
pub fn create_index_response() -> Vec<Record> {
    let sample = |tval: f64, sme: f64, sml: f64| {
        let mut value = json!({
            "tval": tval,
            "SME": sme, "SML": sml, "SMLmlat": 65.1, "SMLmlt": 23.5, "SMLglat": 69.3,
            "SMLglon": 16.0, "SMU": sme + sml, "SMUmlat": 70.2, "SMUmlt": 12.1,
            "SMUglat": 74.5, "SMUglon": 297.5, "smr": -12.0,
            "SMLstid": "AND", "SMUstid": "ALE"
        });
        value.as_object_mut().map(std::mem::take).unwrap()
    };
    vec![
        sample(978307200.0, 214.0, -107.0),
        sample(978307260.0, 228.0, -115.0),
    ]
}
