use serde::{Deserialize, Serialize};

/// The organization running a beacon.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BeaconOrganization {
    pub id: String,
    pub name: String,
}

/// What a beacon says about itself on its root endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BeaconInfo {
    pub id: String,
    pub name: String,
    pub api_version: String,
    pub organization: BeaconOrganization,
    /// The variant table, `project.dataset.table`.
    pub dataset: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_json_names() {
        let info = BeaconInfo {
            id: "b1".to_string(),
            api_version: "v0.0.1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["apiVersion"], "v0.0.1");
        assert_eq!(json["organization"]["id"], "");
    }

    #[rstest]
    fn test_partial_json() {
        let info: BeaconInfo = serde_json::from_str(r#"{"id": "b1", "dataset": "p.d.t"}"#).unwrap();
        assert_eq!(info.id, "b1");
        assert_eq!(info.dataset, "p.d.t");
        assert_eq!(info.organization, BeaconOrganization::default());
    }
}
