use serde_json::Value;

use crate::{
    model::{
        api::MessageDto,
        flag,
        inventory::Category,
        resource_type::{ResourceTypeDto, ResourceTypeFilterDto, ResourceTypeInputDto},
    },
    server::{
        data::resource_type::{
            NewResourceType, ResourceTypeChanges, ResourceTypeFilter, ResourceTypeRepository,
        },
        error::Error,
        sql::SqlExecutor,
        util::non_blank,
    },
};

static RESOURCE_TYPE_NOT_FOUND: &str = "Tipo de recurso no encontrado";
static DUPLICATE_RESOURCE_TYPE: &str =
    "Ya existe un tipo de recurso con ese nombre en la misma categoría";

pub struct ResourceTypeService<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> ResourceTypeService<'a> {
    /// Creates a new instance of [`ResourceTypeService`]
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    /// Lists resource types, optionally filtered by category tag and active flag
    pub async fn list(&self, filter: ResourceTypeFilterDto) -> Result<Vec<ResourceTypeDto>, Error> {
        let activo = non_blank(filter.activo)
            .map(|activo| flag::parse(&Value::String(activo)).unwrap_or(false));

        let resource_types = ResourceTypeRepository::new(self.sql)
            .list(ResourceTypeFilter {
                categoria: non_blank(filter.categoria).map(|categoria| categoria.to_uppercase()),
                activo,
            })
            .await?;

        Ok(resource_types.into_iter().map(ResourceTypeDto::from).collect())
    }

    /// Distinct categories currently in use
    pub async fn categories(&self) -> Result<Vec<String>, Error> {
        Ok(ResourceTypeRepository::new(self.sql).categories().await?)
    }

    pub async fn get(&self, id: i32) -> Result<ResourceTypeDto, Error> {
        ResourceTypeRepository::new(self.sql)
            .get_by_id(id)
            .await?
            .map(ResourceTypeDto::from)
            .ok_or_else(|| Error::not_found(RESOURCE_TYPE_NOT_FOUND))
    }

    /// Creates a resource type; the (categoria, nombre) pair must be unused
    pub async fn create(&self, input: ResourceTypeInputDto) -> Result<ResourceTypeDto, Error> {
        let repo = ResourceTypeRepository::new(self.sql);

        let (Some(categoria), Some(nombre)) =
            (non_blank(input.categoria), non_blank(input.nombre))
        else {
            return Err(Error::validation("La categoría y el nombre son requeridos"));
        };
        let category = parse_category(&categoria)?;

        if repo
            .find_by_category_and_name(category.tag(), &nombre, None)
            .await?
            .is_some()
        {
            return Err(Error::validation(DUPLICATE_RESOURCE_TYPE));
        }

        let resource_type = repo
            .create(NewResourceType {
                categoria: category.tag().to_string(),
                nombre,
                requiere_talla: input.requiere_talla.unwrap_or(false),
                requiere_cantidad: input.requiere_cantidad.unwrap_or(true),
                activo: input.activo.unwrap_or(true),
            })
            .await?;

        Ok(resource_type.into())
    }

    /// Updates the supplied fields, rechecking uniqueness when the category or name changes
    pub async fn update(
        &self,
        id: i32,
        input: ResourceTypeInputDto,
    ) -> Result<ResourceTypeDto, Error> {
        let repo = ResourceTypeRepository::new(self.sql);

        let Some(current) = repo.get_by_id(id).await? else {
            return Err(Error::not_found(RESOURCE_TYPE_NOT_FOUND));
        };

        let categoria = match non_blank(input.categoria) {
            Some(categoria) => Some(parse_category(&categoria)?.tag().to_string()),
            None => None,
        };
        let nombre = non_blank(input.nombre);

        if categoria.is_some() || nombre.is_some() {
            let pair_categoria = categoria.as_deref().unwrap_or(&current.categoria);
            let pair_nombre = nombre.as_deref().unwrap_or(&current.nombre);

            if repo
                .find_by_category_and_name(pair_categoria, pair_nombre, Some(id))
                .await?
                .is_some()
            {
                return Err(Error::validation(DUPLICATE_RESOURCE_TYPE));
            }
        }

        repo.update(
            id,
            ResourceTypeChanges {
                categoria,
                nombre,
                requiere_talla: input.requiere_talla,
                requiere_cantidad: input.requiere_cantidad,
                activo: input.activo,
            },
        )
        .await?
        .map(ResourceTypeDto::from)
        .ok_or_else(|| Error::not_found(RESOURCE_TYPE_NOT_FOUND))
    }

    /// Deletes a resource type unless an inventory row in any category references it
    pub async fn delete(&self, id: i32) -> Result<MessageDto, Error> {
        let repo = ResourceTypeRepository::new(self.sql);

        if repo.get_by_id(id).await?.is_none() {
            return Err(Error::not_found(RESOURCE_TYPE_NOT_FOUND));
        }

        if let Some(category) = repo.find_referencing_category(id).await? {
            return Err(Error::dependency_conflict(format!(
                "No se puede eliminar el tipo de recurso porque está siendo utilizado en {}",
                category.table()
            )));
        }

        repo.delete(id).await?;

        Ok(MessageDto::new("Tipo de recurso eliminado exitosamente"))
    }
}

fn parse_category(categoria: &str) -> Result<Category, Error> {
    Category::from_tag(&categoria.to_uppercase())
        .ok_or_else(|| Error::validation(format!("Categoría inválida: {}", categoria)))
}
