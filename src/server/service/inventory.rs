use crate::{
    model::{
        api::MessageDto,
        inventory::{BrigadeInventoryDto, Category, InventoryInputDto, InventoryItemDto, InventoryRowDto},
    },
    server::{
        data::{
            brigade::BrigadeRepository,
            inventory::{InventoryChanges, InventoryRepository, NewInventoryItem},
            resource_type::ResourceTypeRepository,
            size::SizeRepository,
        },
        error::Error,
        service::Upserted,
        sql::SqlExecutor,
        util::non_blank,
    },
};

static ITEM_NOT_FOUND: &str = "Item de inventario no encontrado";

pub struct InventoryService<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    /// Every inventory row of a brigade, grouped by category
    pub async fn get_by_brigade(&self, brigada_id: i32) -> Result<BrigadeInventoryDto, Error> {
        if BrigadeRepository::new(self.sql)
            .get_by_id(brigada_id)
            .await?
            .is_none()
        {
            return Err(Error::not_found("Brigada no encontrada"));
        }

        let mut inventory = BrigadeInventoryDto::default();
        for category in Category::ALL {
            let rows = InventoryRepository::new(self.sql, category)
                .list_by_brigade(brigada_id)
                .await?;

            *inventory.get_mut(category) = rows.into_iter().map(InventoryRowDto::from).collect();
        }

        Ok(inventory)
    }

    pub async fn get(&self, category: Category, id: i32) -> Result<InventoryItemDto, Error> {
        InventoryRepository::new(self.sql, category)
            .get_by_id(id)
            .await?
            .map(InventoryItemDto::from)
            .ok_or_else(|| Error::not_found(ITEM_NOT_FOUND))
    }

    /// Creates or updates the row for the (brigade, resource type[, size]) tuple.
    ///
    /// Validation runs in order: required ids, brigade exists, resource type exists and belongs
    /// to `category`, then for PPE the size requirement and size existence. Every failure is a
    /// validation error. Sizes are only kept for PPE and amounts only for logistics.
    ///
    /// # Returns
    /// - `Ok(Upserted::Updated)` - An existing row for the tuple was overwritten
    /// - `Ok(Upserted::Created)` - No row existed and one was inserted
    /// - `Err(Error)` - Validation failed or the database returned an error
    pub async fn upsert(
        &self,
        category: Category,
        input: InventoryInputDto,
    ) -> Result<Upserted<InventoryItemDto>, Error> {
        let (Some(brigada_id), Some(tipo_recurso_id)) = (input.brigada_id, input.tipo_recurso_id)
        else {
            return Err(Error::validation(
                "La brigada y el tipo de recurso son requeridos",
            ));
        };

        if BrigadeRepository::new(self.sql)
            .get_by_id(brigada_id)
            .await?
            .is_none()
        {
            return Err(Error::validation("Brigada no encontrada"));
        }

        let Some(resource_type) = ResourceTypeRepository::new(self.sql)
            .get_by_id(tipo_recurso_id)
            .await?
        else {
            return Err(Error::validation("Tipo de recurso no encontrado"));
        };

        if resource_type.categoria != category.tag() {
            return Err(Error::validation(format!(
                "El tipo de recurso no pertenece a la categoría {}",
                category.tag()
            )));
        }

        let talla_id = if category.accepts_size() {
            if resource_type.requiere_talla && input.talla_id.is_none() {
                return Err(Error::validation(
                    "Este tipo de recurso requiere especificar una talla",
                ));
            }

            if let Some(talla_id) = input.talla_id {
                if SizeRepository::new(self.sql)
                    .get_by_id(talla_id)
                    .await?
                    .is_none()
                {
                    return Err(Error::validation("Talla no encontrada"));
                }
            }

            input.talla_id
        } else {
            None
        };

        let monto_aproximado = if category.accepts_amount() {
            input.monto_aproximado
        } else {
            None
        };
        let cantidad = input.cantidad.unwrap_or(0);
        let observaciones = non_blank(input.observaciones);

        let repo = InventoryRepository::new(self.sql, category);

        if let Some(existing) = repo
            .find_existing(brigada_id, tipo_recurso_id, talla_id)
            .await?
        {
            let updated = repo
                .update(
                    existing.id,
                    InventoryChanges {
                        cantidad,
                        observaciones,
                        monto_aproximado,
                    },
                )
                .await?
                .ok_or_else(|| Error::not_found(ITEM_NOT_FOUND))?;

            tracing::debug!(
                category = %category,
                item_id = updated.id,
                "Updated existing inventory row"
            );

            return Ok(Upserted::Updated(updated.into()));
        }

        let created = repo
            .create(NewInventoryItem {
                brigada_id,
                tipo_recurso_id,
                talla_id,
                cantidad,
                monto_aproximado,
                observaciones,
            })
            .await?;

        tracing::debug!(
            category = %category,
            item_id = created.id,
            "Created inventory row"
        );

        Ok(Upserted::Created(created.into()))
    }

    pub async fn delete(&self, category: Category, id: i32) -> Result<MessageDto, Error> {
        let deleted = InventoryRepository::new(self.sql, category).delete(id).await?;

        if deleted == 0 {
            return Err(Error::not_found(ITEM_NOT_FOUND));
        }

        Ok(MessageDto::new("Item eliminado exitosamente"))
    }
}
