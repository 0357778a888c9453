//! Trunk creation wizard
//!
//! A linear, mode-dependent sequence of steps. Registered trunks skip the
//! Options & ACL step. Validation is a pure function of (step, form).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{credentials_csv, Credential, CredentialGenerator, NewTrunk, Transport, TrunkMode, TrunkStatus};

pub const DEFAULT_ENDPOINT_COUNT: u32 = 2;
pub const DEFAULT_MAX_ENDPOINTS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    RegionAndMode,
    Endpoints,
    OptionsAndAcl,
    Review,
}

const REGISTERED_STEPS: &[WizardStep] = &[WizardStep::RegionAndMode, WizardStep::Endpoints, WizardStep::Review];
const STATIC_STEPS: &[WizardStep] = &[
    WizardStep::RegionAndMode,
    WizardStep::Endpoints,
    WizardStep::OptionsAndAcl,
    WizardStep::Review,
];

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::RegionAndMode => 1,
            WizardStep::Endpoints => 2,
            WizardStep::OptionsAndAcl => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::RegionAndMode => "Region & Mode",
            WizardStep::Endpoints => "Endpoints",
            WizardStep::OptionsAndAcl => "Options & ACL",
            WizardStep::Review => "Review",
        }
    }

    /// Steps visited for `mode`. Until a mode is picked the full sequence applies.
    pub fn sequence(mode: Option<TrunkMode>) -> &'static [WizardStep] {
        match mode {
            Some(TrunkMode::Registered) => REGISTERED_STEPS,
            Some(TrunkMode::Static) | None => STATIC_STEPS,
        }
    }
}

/// Form field an error message is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Region,
    Mode,
    /// Static endpoint row, by endpoint id
    Endpoint(u64),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Trunk name is required")]
    NameRequired,
    #[error("Please select a region")]
    RegionRequired,
    #[error("Please select a registration mode")]
    ModeRequired,
    #[error("Endpoint address is required")]
    EndpointAddressRequired,
}

pub type FieldErrors = BTreeMap<FieldKey, ValidationError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("{} step has {} invalid field(s)", .step.label(), .errors.len())]
    Incomplete { step: WizardStep, errors: FieldErrors },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticEndpoint {
    pub id: u64,
    /// IP address or FQDN
    pub address: String,
    pub transport: Transport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardForm {
    pub name: String,
    pub region: Option<String>,
    pub mode: Option<TrunkMode>,
    pub endpoint_count: u32,
    pub credentials: Vec<Credential>,
    pub static_endpoints: Vec<StaticEndpoint>,
    pub options: bool,
    pub acl: Vec<String>,
}

impl Default for WizardForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            region: None,
            mode: None,
            endpoint_count: DEFAULT_ENDPOINT_COUNT,
            credentials: Vec::new(),
            static_endpoints: vec![StaticEndpoint {
                id: 1,
                address: String::new(),
                transport: Transport::Udp,
            }],
            options: true,
            acl: Vec::new(),
        }
    }
}

/// Check the fields owned by `step`. Steps without inputs always pass.
pub fn validate(step: WizardStep, form: &WizardForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        WizardStep::RegionAndMode => {
            if form.name.trim().is_empty() {
                errors.insert(FieldKey::Name, ValidationError::NameRequired);
            }
            if form.region.as_deref().map_or(true, str::is_empty) {
                errors.insert(FieldKey::Region, ValidationError::RegionRequired);
            }
            if form.mode.is_none() {
                errors.insert(FieldKey::Mode, ValidationError::ModeRequired);
            }
        }
        WizardStep::Endpoints if form.mode == Some(TrunkMode::Static) => {
            for endpoint in &form.static_endpoints {
                if endpoint.address.trim().is_empty() {
                    errors.insert(FieldKey::Endpoint(endpoint.id), ValidationError::EndpointAddressRequired);
                }
            }
        }
        _ => {}
    }

    errors
}

#[derive(Debug, Clone)]
pub struct TrunkWizard {
    step: WizardStep,
    max_reached: WizardStep,
    form: WizardForm,
    errors: FieldErrors,
    next_endpoint_id: u64,
    max_endpoints: u32,
    generator: CredentialGenerator,
}

impl TrunkWizard {
    pub fn new(generator: CredentialGenerator) -> Self {
        Self {
            step: WizardStep::RegionAndMode,
            max_reached: WizardStep::RegionAndMode,
            form: WizardForm::default(),
            errors: FieldErrors::new(),
            next_endpoint_id: 2,
            max_endpoints: DEFAULT_MAX_ENDPOINTS,
            generator,
        }
    }

    /// Lower the endpoint cap. Values outside [1, 20] are clamped.
    pub fn with_max_endpoints(mut self, max_endpoints: u32) -> Self {
        self.max_endpoints = max_endpoints.clamp(1, DEFAULT_MAX_ENDPOINTS);
        self
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn max_reached(&self) -> WizardStep {
        self.max_reached
    }

    pub fn form(&self) -> &WizardForm {
        &self.form
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldKey) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Display text for the error on `field`, if any
    pub fn error_message(&self, field: FieldKey) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    pub fn steps(&self) -> &'static [WizardStep] {
        WizardStep::sequence(self.form.mode)
    }

    fn position(&self) -> usize {
        self.steps().iter().position(|s| *s == self.step).unwrap_or(0)
    }

    pub fn is_first(&self) -> bool {
        self.position() == 0
    }

    pub fn is_last(&self) -> bool {
        self.position() + 1 == self.steps().len()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_region(&mut self, region: Option<String>) {
        self.form.region = region.filter(|r| !r.is_empty());
    }

    pub fn set_mode(&mut self, mode: TrunkMode) {
        self.form.mode = Some(mode);
    }

    /// Validate the current step and move forward. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        let errors = validate(self.step, &self.form);
        if !errors.is_empty() {
            tracing::debug!(step = ?self.step, invalid = errors.len(), "wizard advance blocked");
            self.errors = errors;
            return false;
        }
        self.errors.clear();

        let Some(&next) = self.steps().get(self.position() + 1) else {
            return false;
        };

        if self.step == WizardStep::RegionAndMode
            && self.form.mode == Some(TrunkMode::Registered)
            && self.form.credentials.is_empty()
        {
            self.regenerate_credentials();
        }

        self.step = next;
        self.max_reached = self.max_reached.max(next);
        true
    }

    /// Step back without validating
    pub fn retreat(&mut self) {
        self.errors.clear();
        let position = self.position();
        if position > 0 {
            self.step = self.steps()[position - 1];
        }
    }

    /// Replace the credential set with `count` fresh entries, clamped to [1, max].
    pub fn set_endpoint_count(&mut self, count: i64) {
        let clamped = count.clamp(1, i64::from(self.max_endpoints));
        self.form.endpoint_count = clamped as u32;
        self.regenerate_credentials();
    }

    /// Same as [`set_endpoint_count`](Self::set_endpoint_count) for raw input text.
    /// Anything that isn't a number counts as 1.
    pub fn set_endpoint_count_input(&mut self, raw: &str) {
        self.set_endpoint_count(raw.trim().parse().unwrap_or(1));
    }

    pub fn regenerate_credentials(&mut self) {
        let region = self.form.region.clone().unwrap_or_default();
        self.form.credentials = self
            .generator
            .generate(&region, self.form.endpoint_count as usize);
    }

    pub fn credentials_csv(&self) -> String {
        credentials_csv(&self.form.credentials)
    }

    pub fn add_static_endpoint(&mut self) -> u64 {
        let id = self.next_endpoint_id;
        self.next_endpoint_id += 1;
        self.form.static_endpoints.push(StaticEndpoint {
            id,
            address: String::new(),
            transport: Transport::Udp,
        });
        id
    }

    /// Remove an endpoint row. The last remaining row cannot be removed.
    pub fn remove_static_endpoint(&mut self, id: u64) -> bool {
        if self.form.static_endpoints.len() <= 1 {
            return false;
        }
        let before = self.form.static_endpoints.len();
        self.form.static_endpoints.retain(|e| e.id != id);
        self.errors.remove(&FieldKey::Endpoint(id));
        self.form.static_endpoints.len() != before
    }

    pub fn set_endpoint_address(&mut self, id: u64, address: impl Into<String>) {
        if let Some(endpoint) = self.form.static_endpoints.iter_mut().find(|e| e.id == id) {
            endpoint.address = address.into();
        }
    }

    pub fn set_endpoint_transport(&mut self, id: u64, transport: Transport) {
        if let Some(endpoint) = self.form.static_endpoints.iter_mut().find(|e| e.id == id) {
            endpoint.transport = transport;
        }
    }

    pub fn toggle_options(&mut self) {
        self.form.options = !self.form.options;
    }

    /// Add an ACL source. Blank and duplicate entries are ignored.
    pub fn add_acl_entry(&mut self, entry: &str) -> bool {
        let entry = entry.trim();
        if entry.is_empty() || self.form.acl.iter().any(|e| e == entry) {
            return false;
        }
        self.form.acl.push(entry.to_string());
        true
    }

    pub fn remove_acl_entry(&mut self, entry: &str) {
        self.form.acl.retain(|e| e != entry);
    }

    /// Build the trunk draft. Every step in the current sequence is re-checked;
    /// on failure the wizard jumps to the first incomplete step.
    pub fn submit(&mut self) -> Result<NewTrunk, SubmitError> {
        for &step in self.steps() {
            let errors = validate(step, &self.form);
            if !errors.is_empty() {
                return Err(self.incomplete(step, errors));
            }
        }

        let (Some(mode), Some(region)) = (self.form.mode, self.form.region.clone()) else {
            let errors = validate(WizardStep::RegionAndMode, &self.form);
            return Err(self.incomplete(WizardStep::RegionAndMode, errors));
        };

        let (transports, endpoint_count, options) = match mode {
            TrunkMode::Registered => (vec![Transport::Udp], self.form.credentials.len(), false),
            TrunkMode::Static => {
                let mut transports = Vec::new();
                for endpoint in &self.form.static_endpoints {
                    if !transports.contains(&endpoint.transport) {
                        transports.push(endpoint.transport);
                    }
                }
                (transports, self.form.static_endpoints.len(), self.form.options)
            }
        };

        let draft = NewTrunk {
            name: self.form.name.trim().to_string(),
            region,
            mode,
            transports,
            endpoint_count: endpoint_count as u32,
            status: TrunkStatus::default(),
            options,
            acl: self.form.acl.clone(),
        };

        tracing::info!("Submitting trunk {} ({:?}, {} endpoints)", draft.name, mode, draft.endpoint_count);
        Ok(draft)
    }

    fn incomplete(&mut self, step: WizardStep, errors: FieldErrors) -> SubmitError {
        self.step = step;
        self.errors = errors.clone();
        SubmitError::Incomplete { step, errors }
    }

    /// Discard all input and start over at the first step
    pub fn reset(&mut self) {
        self.step = WizardStep::RegionAndMode;
        self.max_reached = WizardStep::RegionAndMode;
        self.form = WizardForm::default();
        self.errors.clear();
        self.next_endpoint_id = 2;
    }
}
