// src/config/hospital.rs
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_assessments: Option<Vec<MonthlyAssessment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAssessment {
    pub month: String,
    pub topics: Vec<NeedsAssessmentTopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedsAssessmentTopic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub responses: Vec<TopicResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub staff_name: String,
    pub response: String,
}

impl NeedsAssessmentTopic {
    /// New topic with a random id and no responses. The title is stored as given.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            responses: Vec::new(),
        }
    }
}

impl Hospital {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            needs_assessments: None,
        }
    }

    /// Topics of the first record for `month`, empty when there is none.
    pub fn topics_for(&self, month: &str) -> &[NeedsAssessmentTopic] {
        self.needs_assessments
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|na| na.month == month)
            .map(|na| na.topics.as_slice())
            .unwrap_or_default()
    }

    /// Replaces the whole topic list of `month`, adding a record if the month has none.
    pub fn replace_topics(&mut self, month: &str, topics: Vec<NeedsAssessmentTopic>) {
        let assessments = self.needs_assessments.get_or_insert_with(Vec::new);
        match assessments.iter_mut().find(|na| na.month == month) {
            Some(record) => record.topics = topics,
            None => assessments.push(MonthlyAssessment {
                month: month.to_string(),
                topics,
            }),
        }
    }
}
