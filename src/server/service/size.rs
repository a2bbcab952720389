use crate::{
    model::{
        api::MessageDto,
        size::{SizeDto, SizeInputDto},
    },
    server::{
        data::size::{NewSize, SizeChanges, SizeRepository},
        error::Error,
        sql::SqlExecutor,
        util::non_blank,
    },
};

static SIZE_NOT_FOUND: &str = "Talla no encontrada";

pub struct SizeService<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> SizeService<'a> {
    /// Creates a new instance of [`SizeService`]
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    pub async fn list(&self) -> Result<Vec<SizeDto>, Error> {
        let sizes = SizeRepository::new(self.sql).list().await?;

        Ok(sizes.into_iter().map(SizeDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<SizeDto, Error> {
        SizeRepository::new(self.sql)
            .get_by_id(id)
            .await?
            .map(SizeDto::from)
            .ok_or_else(|| Error::not_found(SIZE_NOT_FOUND))
    }

    pub async fn create(&self, input: SizeInputDto) -> Result<SizeDto, Error> {
        let repo = SizeRepository::new(self.sql);

        let (Some(codigo), Some(descripcion)) =
            (non_blank(input.codigo), non_blank(input.descripcion))
        else {
            return Err(Error::validation("El código y la descripción son requeridos"));
        };

        if repo.find_by_code(&codigo, None).await?.is_some() {
            return Err(Error::validation("Ya existe una talla con ese código"));
        }

        let size = repo
            .create(NewSize {
                codigo,
                descripcion,
                numero_equivalente: input.numero_equivalente,
            })
            .await?;

        Ok(size.into())
    }

    /// Updates the supplied fields, rejecting a code already held by another size
    pub async fn update(&self, id: i32, input: SizeInputDto) -> Result<SizeDto, Error> {
        let repo = SizeRepository::new(self.sql);

        if repo.get_by_id(id).await?.is_none() {
            return Err(Error::not_found(SIZE_NOT_FOUND));
        }

        let blank = || Error::validation("El código y la descripción no pueden estar vacíos");
        let codigo = match input.codigo {
            Some(codigo) => Some(non_blank(Some(codigo)).ok_or_else(blank)?),
            None => None,
        };
        let descripcion = match input.descripcion {
            Some(descripcion) => Some(non_blank(Some(descripcion)).ok_or_else(blank)?),
            None => None,
        };

        if let Some(codigo) = &codigo {
            if repo.find_by_code(codigo, Some(id)).await?.is_some() {
                return Err(Error::validation("Ya existe otra talla con ese código"));
            }
        }

        repo.update(
            id,
            SizeChanges {
                codigo,
                descripcion,
                numero_equivalente: input.numero_equivalente,
            },
        )
        .await?
        .map(SizeDto::from)
        .ok_or_else(|| Error::not_found(SIZE_NOT_FOUND))
    }

    /// Deletes a size unless PPE inventory still references it
    pub async fn delete(&self, id: i32) -> Result<MessageDto, Error> {
        let repo = SizeRepository::new(self.sql);

        if repo.get_by_id(id).await?.is_none() {
            return Err(Error::not_found(SIZE_NOT_FOUND));
        }

        if repo.count_references(id).await? > 0 {
            return Err(Error::dependency_conflict(
                "No se puede eliminar la talla porque está siendo utilizada en el inventario",
            ));
        }

        repo.delete(id).await?;

        Ok(MessageDto::new("Talla eliminada exitosamente"))
    }
}
