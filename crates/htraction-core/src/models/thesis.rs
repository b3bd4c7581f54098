use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A measurable startup attribute an investor can put criteria on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub description: String,
    pub value: VariableValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum VariableValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    Range { min: f64, max: f64 },
}

/// A named grouping of variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pillar {
    pub id: String,
    pub name: String,
    pub description: String,
    pub variable_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Operator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub pillar_id: String,
    pub operator: Operator,
    pub weight: u32,
}

/// An investment thesis: weighted conditions over pillars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thesis {
    pub id: String,
    pub name: String,
    pub description: String,
    pub conditions: Vec<Condition>,
}

impl Thesis {
    /// Sum of condition weights. Not required to equal 100.
    pub fn total_weight(&self) -> u32 {
        self.conditions.iter().map(|c| c.weight).sum()
    }
}

/// A reference from one thesis object to an id that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingReference {
    /// Id of the pillar or thesis holding the reference.
    pub owner_id: String,
    pub missing_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThesisConfig {
    pub variables: Vec<Variable>,
    pub pillars: Vec<Pillar>,
    pub theses: Vec<Thesis>,
}

impl ThesisConfig {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Name of the variable with `id`, or the id itself when unknown.
    pub fn variable_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.variables
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
            .unwrap_or(id)
    }

    /// Name of the pillar with `id`, or the id itself when unknown.
    pub fn pillar_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.pillars
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or(id)
    }

    /// Pillar variable ids and thesis pillar ids that resolve to nothing.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        for pillar in &self.pillars {
            for var_id in &pillar.variable_ids {
                if !self.variables.iter().any(|v| &v.id == var_id) {
                    dangling.push(DanglingReference {
                        owner_id: pillar.id.clone(),
                        missing_id: var_id.clone(),
                    });
                }
            }
        }
        for thesis in &self.theses {
            for condition in &thesis.conditions {
                if !self.pillars.iter().any(|p| p.id == condition.pillar_id) {
                    dangling.push(DanglingReference {
                        owner_id: thesis.id.clone(),
                        missing_id: condition.pillar_id.clone(),
                    });
                }
            }
        }
        dangling
    }
}

impl Default for ThesisConfig {
    fn default() -> Self {
        let variables = vec![
            variable("var-1", "HScore", "Overall startup health score", VariableValue::Range { min: 75.0, max: 100.0 }),
            variable("var-2", "Revenue Growth Rate", "Monthly revenue growth percentage", VariableValue::Range { min: 10.0, max: 100.0 }),
            variable("var-3", "Founder Experience", "Founder has prior startup experience", VariableValue::Boolean(true)),
            variable("var-4", "Industry", "Startup industry/sector", VariableValue::Text("AI/ML".to_string())),
            variable("var-5", "Funding Stage", "Current funding round", VariableValue::Text("Seed".to_string())),
            variable("var-6", "TAM Size", "Total Addressable Market", VariableValue::Range { min: 1_000_000_000.0, max: 10_000_000_000.0 }),
        ];

        let pillars = vec![
            pillar("pillar-1", "Market Potential", "Evaluates market size and growth potential", &["var-6", "var-2"]),
            pillar("pillar-2", "Team Quality", "Assesses founding team experience and capabilities", &["var-3"]),
            pillar("pillar-3", "Startup Health", "Overall startup health and traction metrics", &["var-1", "var-2"]),
        ];

        let theses = vec![Thesis {
            id: "thesis-1".to_string(),
            name: "AI/ML Seed Stage Focus".to_string(),
            description: "Target AI/ML startups in seed stage with strong market potential"
                .to_string(),
            conditions: vec![
                condition("pillar-1", 40),
                condition("pillar-2", 30),
                condition("pillar-3", 30),
            ],
        }];

        Self {
            variables,
            pillars,
            theses,
        }
    }
}

fn variable(id: &str, name: &str, description: &str, value: VariableValue) -> Variable {
    Variable {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        value,
    }
}

fn pillar(id: &str, name: &str, description: &str, variable_ids: &[&str]) -> Pillar {
    Pillar {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        variable_ids: variable_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn condition(pillar_id: &str, weight: u32) -> Condition {
    Condition {
        pillar_id: pillar_id.to_string(),
        operator: Operator::And,
        weight,
    }
}
