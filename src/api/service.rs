//! # Vehicle Resource Operations
//!
//! The four operations behind the HTTP surface: list-with-pagination,
//! uniqueness-checked create, get-by-VIN, and delete-by-VIN. Generic over
//! the store seam so tests can substitute a fake.
//!
//! Per-request flow: validate input, touch the store, shape an envelope.
//! No operation retries or holds state across requests.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::model::{ACCIDENTS, ACCIDENTS_FIELD, AID_FIELD, VEHICLES, VIN_FIELD};
use crate::observe::LogSink;
use crate::pagination::{PageLinks, PageRequest, UrlTemplate};
use crate::store::{DocumentStore, Filter};
use crate::vin::is_valid_vin;

use super::errors::{ApiError, ApiResult};
use super::response::ListEnvelope;

/// Outcome of a create request.
///
/// A duplicate VIN is not an `ApiError`: the response stays HTTP 200 and
/// only the envelope signals failure. Kept as-is deliberately; see
/// DESIGN.md.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// Inserted; carries the document to echo back, bookkeeping stripped.
    Created(Value),

    /// A vehicle with this VIN already exists; nothing was inserted.
    DuplicateVin,
}

/// Resource operations over the vehicle collection.
pub struct VehicleService<S: DocumentStore> {
    store: Arc<S>,
    template: UrlTemplate,
    log: LogSink,
}

impl<S: DocumentStore> VehicleService<S> {
    pub fn new(store: Arc<S>, template: UrlTemplate, log: LogSink) -> Self {
        Self {
            store,
            template,
            log,
        }
    }

    /// List one page of vehicles with navigation links. Never fails on an
    /// out-of-range page: it yields an empty, well-formed envelope.
    pub fn list(&self, page: &PageRequest) -> ApiResult<ListEnvelope> {
        self.log.info(
            "vehicles.list",
            &[
                ("count", &page.count.to_string()),
                ("startIndex", &page.start_index.to_string()),
            ],
        );

        let found = self
            .store
            .find(VEHICLES, &Filter::all(), page.skip(), Some(page.limit()))?;
        let links = PageLinks::for_page(&self.template, page, found.collection_total);

        self.log
            .info("vehicles.list.done", &[("returned", &found.docs.len().to_string())]);
        Ok(ListEnvelope::new(links, found.docs))
    }

    /// Create a vehicle, enforcing VIN uniqueness through the store's
    /// atomic insert-if-absent primitive.
    ///
    /// The body must carry a string `VIN` field; its shape beyond presence
    /// is not checked here (only the single-item routes validate shape).
    pub fn create(&self, doc: Value) -> ApiResult<CreateOutcome> {
        let vin = doc
            .get(VIN_FIELD)
            .and_then(Value::as_str)
            .ok_or(ApiError::InvalidVin)?
            .to_string();
        self.log.info("vehicles.create", &[("vin", &vin)]);

        if !self.store.insert_unique(VEHICLES, VIN_FIELD, doc.clone())? {
            self.log.info("vehicles.create.duplicate", &[("vin", &vin)]);
            return Ok(CreateOutcome::DuplicateVin);
        }

        self.mirror_accidents(&doc);

        self.log.info("vehicles.create.done", &[("vin", &vin)]);
        Ok(CreateOutcome::Created(doc))
    }

    /// Single write path for the denormalized accident copies: whatever is
    /// embedded in a stored vehicle is also landed in the flat `accidents`
    /// collection, keyed on `AID` so the same accident arriving via two
    /// vehicles is stored once. Best-effort: a mirror failure never fails
    /// the create.
    fn mirror_accidents(&self, doc: &Value) {
        let Some(accidents) = doc.get(ACCIDENTS_FIELD).and_then(Value::as_array) else {
            return;
        };

        for accident in accidents {
            if accident.get(AID_FIELD).is_none() {
                continue;
            }
            if let Err(e) = self
                .store
                .insert_unique(ACCIDENTS, AID_FIELD, accident.clone())
            {
                self.log
                    .warn("accidents.mirror_failed", &[("error", &e.to_string())]);
            }
        }
    }

    /// Fetch all vehicles carrying `vin`. The VIN is validated before the
    /// store is touched.
    pub fn get(&self, vin: &str) -> ApiResult<Vec<Value>> {
        self.log.info("vehicles.get", &[("vin", vin)]);

        if !is_valid_vin(vin) {
            return Err(ApiError::InvalidVin);
        }

        let found = self
            .store
            .find(VEHICLES, &Filter::eq(VIN_FIELD, json!(vin)), 0, None)?;
        if found.docs.is_empty() {
            return Err(ApiError::NotFound);
        }

        self.log.info("vehicles.get.done", &[("vin", vin)]);
        Ok(found.docs)
    }

    /// Delete every vehicle carrying `vin`; returns the removed count.
    pub fn delete(&self, vin: &str) -> ApiResult<u64> {
        self.log.info("vehicles.delete", &[("vin", vin)]);

        if !is_valid_vin(vin) {
            return Err(ApiError::InvalidVin);
        }

        let deleted = self
            .store
            .delete_many(VEHICLES, &Filter::eq(VIN_FIELD, json!(vin)))?;
        if deleted == 0 {
            return Err(ApiError::NotFound);
        }

        self.log
            .info("vehicles.delete.done", &[("deleted", &deleted.to_string())]);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create_test_service() -> VehicleService<MemoryStore> {
        VehicleService::new(
            Arc::new(MemoryStore::new()),
            UrlTemplate::new("http://127.0.0.1:8080/api/vehicles"),
            LogSink::stdout(),
        )
    }

    fn vehicle(vin: &str) -> Value {
        json!({
            "VIN": vin,
            "Modelname": "Tesla Model S",
            "Modelyear": "2020",
            "Location": {"City": "Palo Alto", "State": "California"},
            "previousownerscount": 3
        })
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let service = create_test_service();

        let outcome = service.create(vehicle("123ABC")).unwrap();
        let echoed = match outcome {
            CreateOutcome::Created(doc) => doc,
            other => panic!("expected Created, got {:?}", other),
        };
        assert_eq!(echoed, vehicle("123ABC"));

        let fetched = service.get("123ABC").unwrap();
        assert_eq!(fetched, vec![vehicle("123ABC")]);
    }

    #[test]
    fn test_duplicate_create_is_soft_failure() {
        let service = create_test_service();

        service.create(vehicle("123ABC")).unwrap();
        let outcome = service.create(vehicle("123ABC")).unwrap();
        assert!(matches!(outcome, CreateOutcome::DuplicateVin));

        // The store still has exactly one document with that VIN.
        let fetched = service.get("123ABC").unwrap();
        assert_eq!(fetched.len(), 1);
    }

    #[test]
    fn test_create_without_vin_is_invalid() {
        let service = create_test_service();

        let result = service.create(json!({"Modelname": "Tesla Model S"}));
        assert!(matches!(result, Err(ApiError::InvalidVin)));

        let result = service.create(json!({"VIN": 123456}));
        assert!(matches!(result, Err(ApiError::InvalidVin)));
    }

    #[test]
    fn test_get_validates_vin_before_store() {
        let service = create_test_service();

        assert!(matches!(service.get("AB"), Err(ApiError::InvalidVin)));
        assert!(matches!(service.get("ABCDEFG"), Err(ApiError::InvalidVin)));
    }

    #[test]
    fn test_get_missing_vehicle_is_not_found() {
        let service = create_test_service();
        assert!(matches!(service.get("999ZZZ"), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_delete_removes_and_reports_count() {
        let service = create_test_service();
        service.create(vehicle("123ABC")).unwrap();

        assert_eq!(service.delete("123ABC").unwrap(), 1);
        assert!(matches!(service.get("123ABC"), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_delete_missing_vehicle_is_not_found() {
        let service = create_test_service();
        service.create(vehicle("123ABC")).unwrap();

        assert!(matches!(service.delete("999ZZZ"), Err(ApiError::NotFound)));
        // Store unchanged.
        assert_eq!(service.get("123ABC").unwrap().len(), 1);
    }

    #[test]
    fn test_embedded_accidents_are_mirrored_once() {
        let store = Arc::new(MemoryStore::new());
        let service = VehicleService::new(
            Arc::clone(&store),
            UrlTemplate::new("http://127.0.0.1:8080/api/vehicles"),
            LogSink::stdout(),
        );

        let accident = json!({
            "AID": 1,
            "Carsinvolved": ["123ABC", "321CBA"],
            "Date": "12/05/2021",
            "Location": {"City": "San Francisco", "State": "California"},
            "Description": "Minor fender bender near Golden Gate Bridge"
        });

        let mut first = vehicle("123ABC");
        first["accidents"] = json!([accident]);
        let mut second = vehicle("321CBA");
        second["accidents"] = json!([accident]);

        service.create(first).unwrap();
        service.create(second).unwrap();

        let page = store.find(ACCIDENTS, &Filter::all(), 0, None).unwrap();
        assert_eq!(page.docs.len(), 1);
        assert_eq!(page.docs[0]["AID"], 1);
    }
}
