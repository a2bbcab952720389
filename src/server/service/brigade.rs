use crate::{
    model::{
        api::MessageDto,
        brigade::{BrigadeDto, BrigadeInputDto},
    },
    server::{
        data::brigade::{BrigadeChanges, BrigadeRepository, NewBrigade},
        error::Error,
        sql::SqlExecutor,
        util::non_blank,
    },
};

static BRIGADE_NOT_FOUND: &str = "Brigada no encontrada";

pub struct BrigadeService<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> BrigadeService<'a> {
    /// Creates a new instance of [`BrigadeService`]
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    pub async fn list(&self) -> Result<Vec<BrigadeDto>, Error> {
        let brigades = BrigadeRepository::new(self.sql).list().await?;

        Ok(brigades.into_iter().map(BrigadeDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<BrigadeDto, Error> {
        BrigadeRepository::new(self.sql)
            .get_by_id(id)
            .await?
            .map(BrigadeDto::from)
            .ok_or_else(|| Error::not_found(BRIGADE_NOT_FOUND))
    }

    /// Creates a brigade; `nombre` is required and blank contact fields are stored as null
    pub async fn create(&self, input: BrigadeInputDto) -> Result<BrigadeDto, Error> {
        let nombre = non_blank(input.nombre)
            .ok_or_else(|| Error::validation("El nombre de la brigada es requerido"))?;

        let brigade = BrigadeRepository::new(self.sql)
            .create(NewBrigade {
                nombre,
                cantidad_bomberos_activos: input.cantidad_bomberos_activos.unwrap_or(0),
                contacto_celular_comandante: non_blank(input.contacto_celular_comandante),
                encargado_logistica: non_blank(input.encargado_logistica),
                contacto_celular_logistica: non_blank(input.contacto_celular_logistica),
                numero_emergencia_publico: non_blank(input.numero_emergencia_publico),
            })
            .await?;

        tracing::debug!(brigade_id = brigade.id, "Created brigade");

        Ok(brigade.into())
    }

    /// Updates only the supplied fields; a supplied blank contact field clears it
    pub async fn update(&self, id: i32, input: BrigadeInputDto) -> Result<BrigadeDto, Error> {
        let nombre = match input.nombre {
            Some(nombre) => Some(non_blank(Some(nombre)).ok_or_else(|| {
                Error::validation("El nombre de la brigada no puede estar vacío")
            })?),
            None => None,
        };

        let changes = BrigadeChanges {
            nombre,
            cantidad_bomberos_activos: input.cantidad_bomberos_activos,
            contacto_celular_comandante: input
                .contacto_celular_comandante
                .map(|v| non_blank(Some(v))),
            encargado_logistica: input.encargado_logistica.map(|v| non_blank(Some(v))),
            contacto_celular_logistica: input
                .contacto_celular_logistica
                .map(|v| non_blank(Some(v))),
            numero_emergencia_publico: input
                .numero_emergencia_publico
                .map(|v| non_blank(Some(v))),
        };

        BrigadeRepository::new(self.sql)
            .update(id, changes)
            .await?
            .map(BrigadeDto::from)
            .ok_or_else(|| Error::not_found(BRIGADE_NOT_FOUND))
    }

    /// Deletes the brigade and every inventory row it owns
    pub async fn delete(&self, id: i32) -> Result<MessageDto, Error> {
        let deleted = BrigadeRepository::new(self.sql)
            .delete_with_inventory(id)
            .await?;

        if deleted == 0 {
            return Err(Error::not_found(BRIGADE_NOT_FOUND));
        }

        tracing::debug!(brigade_id = id, "Deleted brigade and its inventory");

        Ok(MessageDto::new("Brigada eliminada exitosamente"))
    }
}
