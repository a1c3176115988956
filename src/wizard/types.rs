//! Type definitions for the wizard controller

use serde::Serialize;

use crate::catalog;

/// Steps of the wizard, numbered 1 through 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Primary focus of the idea
    Focus,
    /// Primary industry
    Industry,
    /// Sub-industry of the chosen industry
    SubIndustry,
    /// Technology domain
    Technology,
    /// Business model
    BusinessModel,
    /// Target audience
    Audience,
    /// Market segment (selecting it starts generation)
    MarketSegment,
    /// Suggested problems
    Results,
}

impl WizardStep {
    /// The seven steps that collect a selection, in order
    pub fn selecting() -> &'static [WizardStep] {
        &[
            WizardStep::Focus,
            WizardStep::Industry,
            WizardStep::SubIndustry,
            WizardStep::Technology,
            WizardStep::BusinessModel,
            WizardStep::Audience,
            WizardStep::MarketSegment,
        ]
    }

    /// Step cursor value in [1, 8]
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Focus => 1,
            WizardStep::Industry => 2,
            WizardStep::SubIndustry => 3,
            WizardStep::Technology => 4,
            WizardStep::BusinessModel => 5,
            WizardStep::Audience => 6,
            WizardStep::MarketSegment => 7,
            WizardStep::Results => 8,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::Focus),
            2 => Some(WizardStep::Industry),
            3 => Some(WizardStep::SubIndustry),
            4 => Some(WizardStep::Technology),
            5 => Some(WizardStep::BusinessModel),
            6 => Some(WizardStep::Audience),
            7 => Some(WizardStep::MarketSegment),
            8 => Some(WizardStep::Results),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    /// Heading shown above the options
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Focus => {
                "Which of the following best describes the primary focus of your start-up idea?"
            }
            WizardStep::Industry => "Select the Primary Industry",
            WizardStep::SubIndustry => "Select the Sub-Industry",
            WizardStep::Technology => "Select the Technology Domain",
            WizardStep::BusinessModel => "Select the Business Model",
            WizardStep::Audience => "Select the Target Audience",
            WizardStep::MarketSegment => "Select the Market Segment",
            WizardStep::Results => "Suggested Problems",
        }
    }

    /// Field label used in prompts and summaries
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Focus => "Focus",
            WizardStep::Industry => "Industry",
            WizardStep::SubIndustry => "Sub-Industry",
            WizardStep::Technology => "Technology Domain",
            WizardStep::BusinessModel => "Business Model",
            WizardStep::Audience => "Target Audience",
            WizardStep::MarketSegment => "Market Segment",
            WizardStep::Results => "Results",
        }
    }
}

/// The seven values collected by the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSet {
    pub focus: String,
    pub industry: String,
    pub sub_industry: String,
    pub technology: String,
    pub business_model: String,
    pub audience: String,
    pub market_segment: String,
}

impl SelectionSet {
    /// Value recorded for a step (empty for Results)
    pub fn get(&self, step: WizardStep) -> &str {
        match step {
            WizardStep::Focus => &self.focus,
            WizardStep::Industry => &self.industry,
            WizardStep::SubIndustry => &self.sub_industry,
            WizardStep::Technology => &self.technology,
            WizardStep::BusinessModel => &self.business_model,
            WizardStep::Audience => &self.audience,
            WizardStep::MarketSegment => &self.market_segment,
            WizardStep::Results => "",
        }
    }

    pub(crate) fn set(&mut self, step: WizardStep, value: String) {
        match step {
            WizardStep::Focus => self.focus = value,
            WizardStep::Industry => self.industry = value,
            WizardStep::SubIndustry => self.sub_industry = value,
            WizardStep::Technology => self.technology = value,
            WizardStep::BusinessModel => self.business_model = value,
            WizardStep::Audience => self.audience = value,
            WizardStep::MarketSegment => self.market_segment = value,
            WizardStep::Results => {}
        }
    }

    /// (label, value) pairs in step order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        WizardStep::selecting()
            .iter()
            .map(|step| (step.label(), self.get(*step)))
            .collect()
    }

    /// Steps whose value is still blank
    pub fn missing(&self) -> Vec<WizardStep> {
        WizardStep::selecting()
            .iter()
            .copied()
            .filter(|step| self.get(*step).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self == &SelectionSet::default()
    }
}

/// Options offered at a step, read from the catalog
pub fn options_for(step: WizardStep, selections: &SelectionSet) -> Vec<&'static str> {
    match step {
        WizardStep::Focus => catalog::FOCUS_OPTIONS.to_vec(),
        WizardStep::Industry => catalog::industry_names(),
        WizardStep::SubIndustry => catalog::sub_industries(&selections.industry).to_vec(),
        WizardStep::Technology => catalog::TECHNOLOGY_DOMAINS.to_vec(),
        WizardStep::BusinessModel => catalog::BUSINESS_MODELS.to_vec(),
        WizardStep::Audience => catalog::TARGET_AUDIENCES.to_vec(),
        WizardStep::MarketSegment => catalog::MARKET_SEGMENTS.to_vec(),
        WizardStep::Results => Vec::new(),
    }
}

/// Where the wizard is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Waiting for the user to pick an option
    Selecting,
    /// A generation request is in flight
    Generating,
    /// Suggestions are displayed
    Results,
    /// Generation failed; reset is required
    Error,
}

/// Work handed to the suggestion generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Matches the outcome back to the state that issued it
    pub id: u64,
    pub selections: SelectionSet,
}

/// Result of a selection: the next snapshot and, after the last step, a request
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: super::WizardState,
    pub request: Option<GenerationRequest>,
}
