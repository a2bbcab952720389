//! Ten-step brigade form: brigade details, one step per inventory category, then review.
//!
//! The wizard only holds local state. Nothing reaches the API until [`Wizard::submit`] runs on
//! the review step, which saves the brigade and then upserts one inventory row per positive
//! quantity, pausing between requests.

use std::{collections::BTreeMap, time::Duration};

use thiserror::Error;

use crate::{
    client::api::{BrigadeApi, ClientError},
    model::{
        brigade::{BrigadeDto, BrigadeInputDto},
        inventory::{BrigadeInventoryDto, Category, InventoryInputDto, InventoryItemDto},
        resource_type::ResourceTypeDto,
        size::SizeDto,
    },
};

/// Pause between consecutive API calls during submission
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Brigade,
    Inventory(Category),
    Review,
}

impl WizardStep {
    pub const COUNT: usize = Category::ALL.len() + 2;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Brigade),
            i if i <= Category::ALL.len() => Some(Self::Inventory(Category::ALL[i - 1])),
            i if i == Self::COUNT - 1 => Some(Self::Review),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Brigade => 0,
            Self::Inventory(category) => {
                1 + Category::ALL
                    .iter()
                    .position(|c| *c == category)
                    .unwrap_or_default()
            }
            Self::Review => Self::COUNT - 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Brigade => "Información Brigada",
            Self::Inventory(Category::Ppe) => "EPP",
            Self::Inventory(Category::Tools) => "Herramientas",
            Self::Inventory(Category::Logistics) => "Logística",
            Self::Inventory(Category::Food) => "Alimentación",
            Self::Inventory(Category::Field) => "Equipo Campo",
            Self::Inventory(Category::Cleaning) => "Limpieza",
            Self::Inventory(Category::Medicine) => "Medicamentos",
            Self::Inventory(Category::AnimalRescue) => "Rescate Animal",
            Self::Review => "Revisión Final",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    #[error("El nombre de la brigada es requerido")]
    BrigadeNameRequired,
    #[error("Already on the last step")]
    AtLastStep,
    #[error("Submission is only possible from the review step")]
    NotOnFinalStep,
    #[error("A submission is already in progress")]
    SubmissionInFlight,
    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Sizes and active resource types the form is filled against
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub sizes: Vec<SizeDto>,
    pub resource_types: Vec<ResourceTypeDto>,
}

impl Catalog {
    /// Resource types of one category, in catalog order
    pub fn resource_types_in(&self, category: Category) -> impl Iterator<Item = &ResourceTypeDto> {
        self.resource_types
            .iter()
            .filter(move |t| t.categoria == category.tag())
    }

    pub fn size_by_code(&self, codigo: &str) -> Option<&SizeDto> {
        self.sizes.iter().find(|s| s.codigo == codigo)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeEntry {
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Form values for one resource type, keyed in [`CategoryForm`] by resource name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceEntry {
    pub quantity: i32,
    pub notes: Option<String>,
    /// Quantities per size code, for resource types that require a size
    pub sizes: BTreeMap<String, SizeEntry>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryForm {
    /// Note applied to every row of the category without a more specific one
    pub notes: Option<String>,
    pub entries: BTreeMap<String, ResourceEntry>,
}

/// Result of a completed submission
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionReport {
    pub brigade: BrigadeDto,
    pub items: Vec<InventoryItemDto>,
}

pub struct Wizard {
    step: usize,
    brigade_id: Option<i32>,
    pub brigade: BrigadeInputDto,
    inventory: BTreeMap<Category, CategoryForm>,
    catalog: Catalog,
    submitting: bool,
}

impl Wizard {
    /// Empty form for a new brigade
    pub fn new(catalog: Catalog) -> Self {
        Self {
            step: 0,
            brigade_id: None,
            brigade: BrigadeInputDto::default(),
            inventory: BTreeMap::new(),
            catalog,
            submitting: false,
        }
    }

    /// Loads the catalog and, when editing, the brigade and its current inventory
    pub async fn load(api: &dyn BrigadeApi, brigade_id: Option<i32>) -> Result<Self, WizardError> {
        let catalog = Catalog {
            sizes: api.list_sizes().await?,
            resource_types: api.list_resource_types().await?,
        };

        let mut wizard = Self::new(catalog);

        if let Some(id) = brigade_id {
            let brigade = api.get_brigade(id).await?;
            let inventory = api.get_inventory(id).await?;

            wizard.brigade_id = Some(brigade.id);
            wizard.brigade = brigade_input(&brigade);
            wizard.load_inventory(&inventory);
        }

        Ok(wizard)
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::from_index(self.step).unwrap_or(WizardStep::Review)
    }

    pub fn brigade_id(&self) -> Option<i32> {
        self.brigade_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Only the brigade step is guarded: it needs a non-blank name
    pub fn can_advance(&self) -> bool {
        match self.step() {
            WizardStep::Brigade => self
                .brigade
                .nombre
                .as_deref()
                .is_some_and(|nombre| !nombre.trim().is_empty()),
            _ => true,
        }
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        if self.step() == WizardStep::Review {
            return Err(WizardError::AtLastStep);
        }
        if !self.can_advance() {
            return Err(WizardError::BrigadeNameRequired);
        }

        self.step += 1;

        Ok(self.step())
    }

    /// Moves back one step; stays put on the first step
    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.saturating_sub(1);

        self.step()
    }

    pub fn category(&self, category: Category) -> Option<&CategoryForm> {
        self.inventory.get(&category)
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryForm {
        self.inventory.entry(category).or_default()
    }

    pub fn entry_mut(&mut self, category: Category, resource: &str) -> &mut ResourceEntry {
        self.category_mut(category)
            .entries
            .entry(resource.to_string())
            .or_default()
    }

    pub fn set_quantity(&mut self, category: Category, resource: &str, quantity: i32) {
        self.entry_mut(category, resource).quantity = quantity;
    }

    pub fn set_size_quantity(
        &mut self,
        category: Category,
        resource: &str,
        size_code: &str,
        quantity: i32,
    ) {
        self.entry_mut(category, resource)
            .sizes
            .entry(size_code.to_string())
            .or_default()
            .quantity = quantity;
    }

    /// Replaces the form inventory with the rows returned by the API
    pub fn load_inventory(&mut self, inventory: &BrigadeInventoryDto) {
        self.inventory.clear();

        for category in Category::ALL {
            for row in inventory.get(category) {
                let entry = self.entry_mut(category, &row.tipo_recurso_nombre);

                match &row.talla_codigo {
                    Some(codigo) => {
                        entry.sizes.insert(
                            codigo.clone(),
                            SizeEntry {
                                quantity: row.cantidad,
                                notes: row.observaciones.clone(),
                            },
                        );
                    }
                    None => {
                        entry.quantity = row.cantidad;
                        entry.notes = row.observaciones.clone();
                    }
                }
            }
        }
    }

    /// Inventory upserts the form translates to, in category then catalog order.
    ///
    /// Rows with a zero quantity, resources missing from the catalog and unknown size codes
    /// are skipped. A note falls back from size to resource to category.
    pub fn plan_inventory(&self, brigade_id: i32) -> Vec<(Category, InventoryInputDto)> {
        let mut plan = Vec::new();

        for category in Category::ALL {
            let Some(form) = self.inventory.get(&category) else {
                continue;
            };

            for resource_type in self.catalog.resource_types_in(category) {
                let Some(entry) = form.entries.get(&resource_type.nombre) else {
                    continue;
                };
                let resource_notes = entry.notes.clone().or_else(|| form.notes.clone());

                if resource_type.requiere_talla {
                    for (codigo, size_entry) in &entry.sizes {
                        if size_entry.quantity <= 0 {
                            continue;
                        }
                        let Some(size) = self.catalog.size_by_code(codigo) else {
                            tracing::warn!("Skipping unknown size code {}", codigo);
                            continue;
                        };

                        plan.push((
                            category,
                            InventoryInputDto {
                                brigada_id: Some(brigade_id),
                                tipo_recurso_id: Some(resource_type.id),
                                talla_id: Some(size.id),
                                cantidad: Some(size_entry.quantity),
                                monto_aproximado: None,
                                observaciones: size_entry
                                    .notes
                                    .clone()
                                    .or_else(|| resource_notes.clone()),
                            },
                        ));
                    }
                } else if entry.quantity > 0 {
                    plan.push((
                        category,
                        InventoryInputDto {
                            brigada_id: Some(brigade_id),
                            tipo_recurso_id: Some(resource_type.id),
                            talla_id: None,
                            cantidad: Some(entry.quantity),
                            monto_aproximado: None,
                            observaciones: resource_notes,
                        },
                    ));
                }
            }
        }

        plan
    }

    /// Marks a submission as started.
    ///
    /// # Returns
    /// - `Ok(())` - On the review step with no submission running
    /// - `Err(WizardError::NotOnFinalStep)` - Any other step
    /// - `Err(WizardError::SubmissionInFlight)` - A submission has not finished yet
    pub fn begin_submission(&mut self) -> Result<(), WizardError> {
        if self.step() != WizardStep::Review {
            return Err(WizardError::NotOnFinalStep);
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }

        self.submitting = true;

        Ok(())
    }

    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }

    /// Saves the brigade, then every planned inventory row, waiting `throttle` between calls.
    ///
    /// The first failing call aborts the submission. Rows already saved stay saved; submitting
    /// again upserts them in place.
    pub async fn submit(
        &mut self,
        api: &dyn BrigadeApi,
        throttle: Duration,
    ) -> Result<SubmissionReport, WizardError> {
        self.begin_submission()?;

        let result = self.replay(api, throttle).await;

        self.finish_submission();

        let report = result?;
        self.brigade_id = Some(report.brigade.id);

        Ok(report)
    }

    async fn replay(
        &self,
        api: &dyn BrigadeApi,
        throttle: Duration,
    ) -> Result<SubmissionReport, WizardError> {
        let brigade = match self.brigade_id {
            Some(id) => api.update_brigade(id, &self.brigade).await?,
            None => api.create_brigade(&self.brigade).await?,
        };

        let mut items = Vec::new();
        for (category, input) in self.plan_inventory(brigade.id) {
            if !throttle.is_zero() {
                tokio::time::sleep(throttle).await;
            }

            items.push(api.upsert_inventory(category, &input).await?);
        }

        tracing::info!(
            brigade_id = brigade.id,
            items = items.len(),
            "Brigade form submitted"
        );

        Ok(SubmissionReport { brigade, items })
    }
}

fn brigade_input(brigade: &BrigadeDto) -> BrigadeInputDto {
    BrigadeInputDto {
        nombre: Some(brigade.nombre.clone()),
        cantidad_bomberos_activos: Some(brigade.cantidad_bomberos_activos),
        contacto_celular_comandante: brigade.contacto_celular_comandante.clone(),
        encargado_logistica: brigade.encargado_logistica.clone(),
        contacto_celular_logistica: brigade.contacto_celular_logistica.clone(),
        numero_emergencia_publico: brigade.numero_emergencia_publico.clone(),
    }
}
