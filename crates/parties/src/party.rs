use serde::Serialize;

use forgetender_core::{
    rules, AggregateRoot, BusinessFunctionType, DomainError, DomainResult, PartyId, Period,
};
use forgetender_requests::{RawAddress, RawBusinessFunction, RawIdentifier, RawPerson,
    RawProcuringEntity};

/// Registered identifier of an organization (scheme + registration id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityIdentifier {
    pub scheme: String,
    pub id: String,
    pub legal_name: String,
    pub uri: Option<String>,
}

impl EntityIdentifier {
    fn try_create(path: &str, raw: &RawIdentifier) -> DomainResult<Self> {
        Ok(Self {
            scheme: rules::non_blank(&format!("{path}.scheme"), &raw.scheme)?,
            id: rules::non_blank(&format!("{path}.id"), &raw.id)?,
            legal_name: rules::non_blank(&format!("{path}.legalName"), &raw.legal_name)?,
            uri: raw.uri.clone(),
        })
    }
}

/// Postal address of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street_address: String,
    pub locality: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    fn try_create(path: &str, raw: &RawAddress) -> DomainResult<Self> {
        let country_path = format!("{path}.country");
        if raw.country.len() != 2 || !raw.country.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::pattern_mismatch(&country_path, &raw.country));
        }
        Ok(Self {
            street_address: rules::non_blank(&format!("{path}.streetAddress"), &raw.street_address)?,
            locality: rules::non_blank(&format!("{path}.locality"), &raw.locality)?,
            region: raw.region.clone(),
            postal_code: raw.postal_code.clone(),
            country: raw.country.clone(),
        })
    }
}

/// Role a person performs for the procuring entity, effective from a start
/// date (the period carries no end while the function is still held).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessFunction {
    pub id: String,
    pub kind: BusinessFunctionType,
    pub job_title: String,
    pub period: Period,
}

impl BusinessFunction {
    fn try_create(
        path: &str,
        raw: &RawBusinessFunction,
        allowed: &[BusinessFunctionType],
    ) -> DomainResult<Self> {
        let id = rules::non_blank(&format!("{path}.id"), &raw.id)?;
        let kind = BusinessFunctionType::parse_allowed(&format!("{path}.type"), &raw.kind, allowed)?;
        let job_title = rules::non_blank(&format!("{path}.jobTitle"), &raw.job_title)?;
        let period_path = format!("{path}.period");
        let period = match raw.period.end_date.as_deref() {
            Some(end) => Period::try_create(&period_path, &raw.period.start_date, end)?,
            None => Period::try_create_open(&period_path, &raw.period.start_date)?,
        };
        Ok(Self {
            id,
            kind,
            job_title,
            period,
        })
    }
}

/// A person acting for the procuring entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub title: String,
    pub name: String,
    pub identifier: EntityIdentifier,
    pub business_functions: Vec<BusinessFunction>,
}

impl Person {
    fn try_create(
        path: &str,
        raw: &RawPerson,
        allowed_functions: &[BusinessFunctionType],
    ) -> DomainResult<Self> {
        let title = rules::non_blank(&format!("{path}.title"), &raw.title)?;
        let name = rules::non_blank(&format!("{path}.name"), &raw.name)?;
        let identifier = EntityIdentifier::try_create(&format!("{path}.identifier"), &raw.identifier)?;

        let functions_path = format!("{path}.businessFunctions");
        rules::non_empty(&functions_path, &raw.business_functions)?;
        rules::unique_by(&functions_path, &raw.business_functions, |bf| bf.id.clone())?;

        let mut business_functions = Vec::with_capacity(raw.business_functions.len());
        for (i, raw_bf) in raw.business_functions.iter().enumerate() {
            business_functions.push(BusinessFunction::try_create(
                &format!("{functions_path}[{i}]"),
                raw_bf,
                allowed_functions,
            )?);
        }

        Ok(Self {
            title,
            name,
            identifier,
            business_functions,
        })
    }
}

/// Aggregate root: the organization running the procurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcuringEntity {
    id: PartyId,
    name: String,
    identifier: EntityIdentifier,
    address: Address,
    persons: Vec<Person>,
}

impl ProcuringEntity {
    /// Validate a raw procuring entity into an aggregate.
    ///
    /// `allowed_functions` is the calling operation's allow-set for person
    /// business-function types.
    pub fn try_create(
        path: &str,
        raw: &RawProcuringEntity,
        allowed_functions: &[BusinessFunctionType],
    ) -> DomainResult<Self> {
        let id = PartyId::parse(&format!("{path}.id"), &raw.id)?;
        let name = rules::non_blank(&format!("{path}.name"), &raw.name)?;
        let identifier = EntityIdentifier::try_create(&format!("{path}.identifier"), &raw.identifier)?;
        let address = Address::try_create(&format!("{path}.address"), &raw.address)?;

        let persons_path = format!("{path}.persons");
        rules::non_empty(&persons_path, &raw.persons)?;
        rules::unique_by(&persons_path, &raw.persons, |p| p.identifier.id.clone())?;

        let mut persons = Vec::with_capacity(raw.persons.len());
        for (i, raw_person) in raw.persons.iter().enumerate() {
            persons.push(Person::try_create(
                &format!("{persons_path}[{i}]"),
                raw_person,
                allowed_functions,
            )?);
        }

        Ok(Self {
            id,
            name,
            identifier,
            address,
            persons,
        })
    }

    pub fn id_typed(&self) -> PartyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &EntityIdentifier {
        &self.identifier
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }
}

impl AggregateRoot for ProcuringEntity {
    type Id = PartyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgetender_requests::RawPeriod;

    fn raw_identifier(id: &str) -> RawIdentifier {
        RawIdentifier {
            scheme: "MD-IDNO".to_string(),
            id: id.to_string(),
            legal_name: "City hall of Testville".to_string(),
            uri: None,
        }
    }

    fn raw_business_function(id: &str, kind: &str) -> RawBusinessFunction {
        RawBusinessFunction {
            id: id.to_string(),
            kind: kind.to_string(),
            job_title: "Head of procurement".to_string(),
            period: RawPeriod {
                start_date: "2024-01-01T00:00:00Z".to_string(),
                end_date: None,
            },
        }
    }

    fn raw_person(identifier_id: &str) -> RawPerson {
        RawPerson {
            title: "Mr.".to_string(),
            name: "Ion Munteanu".to_string(),
            identifier: raw_identifier(identifier_id),
            business_functions: vec![raw_business_function("bf-1", "contactPoint")],
        }
    }

    fn raw_entity() -> RawProcuringEntity {
        RawProcuringEntity {
            id: PartyId::generate().to_string(),
            name: "City hall of Testville".to_string(),
            identifier: raw_identifier("1003600000000"),
            address: RawAddress {
                street_address: "Main st. 1".to_string(),
                locality: "Testville".to_string(),
                region: None,
                postal_code: None,
                country: "MD".to_string(),
            },
            persons: vec![raw_person("2004700000000")],
        }
    }

    const ALLOWED: &[BusinessFunctionType] = &[
        BusinessFunctionType::ContactPoint,
        BusinessFunctionType::ProcurementOfficer,
    ];

    #[test]
    fn valid_entity_constructs() {
        let entity = ProcuringEntity::try_create("procuringEntity", &raw_entity(), ALLOWED).unwrap();
        assert_eq!(entity.persons().len(), 1);
        assert_eq!(
            entity.persons()[0].business_functions[0].kind,
            BusinessFunctionType::ContactPoint
        );
        assert_eq!(entity.persons()[0].business_functions[0].period.end(), None);
    }

    #[test]
    fn empty_persons_collection_is_rejected() {
        let mut raw = raw_entity();
        raw.persons.clear();
        let err = ProcuringEntity::try_create("procuringEntity", &raw, ALLOWED).unwrap_err();
        assert_eq!(err, DomainError::empty_collection("procuringEntity.persons"));
    }

    #[test]
    fn person_without_business_functions_is_rejected() {
        let mut raw = raw_entity();
        raw.persons[0].business_functions.clear();
        let err = ProcuringEntity::try_create("procuringEntity", &raw, ALLOWED).unwrap_err();
        assert_eq!(
            err,
            DomainError::empty_collection("procuringEntity.persons[0].businessFunctions")
        );
    }

    #[test]
    fn duplicate_business_function_ids_are_reported() {
        let mut raw = raw_entity();
        raw.persons[0]
            .business_functions
            .push(raw_business_function("bf-1", "procurementOfficer"));
        let err = ProcuringEntity::try_create("procuringEntity", &raw, ALLOWED).unwrap_err();
        assert_eq!(
            err,
            DomainError::uniqueness(
                "procuringEntity.persons[0].businessFunctions",
                vec!["bf-1".to_string()]
            )
        );
    }

    #[test]
    fn business_function_type_outside_allow_set_is_rejected() {
        let mut raw = raw_entity();
        // A real code, just not permitted for this operation.
        raw.persons[0].business_functions[0].kind = "priceEvaluator".to_string();
        let err = ProcuringEntity::try_create("procuringEntity", &raw, ALLOWED).unwrap_err();
        assert!(matches!(err, DomainError::IncorrectAttribute { .. }));
    }

    #[test]
    fn malformed_entity_id_short_circuits_before_persons() {
        let mut raw = raw_entity();
        raw.id = "not-a-uuid".to_string();
        raw.persons.clear();
        let err = ProcuringEntity::try_create("procuringEntity", &raw, ALLOWED).unwrap_err();
        // The id parse failure is surfaced, not the later empty-persons one.
        assert_eq!(
            err,
            DomainError::pattern_mismatch("procuringEntity.id", "not-a-uuid")
        );
    }

    #[test]
    fn lowercase_country_code_is_rejected() {
        let mut raw = raw_entity();
        raw.address.country = "md".to_string();
        let err = ProcuringEntity::try_create("procuringEntity", &raw, ALLOWED).unwrap_err();
        assert_eq!(
            err,
            DomainError::pattern_mismatch("procuringEntity.address.country", "md")
        );
    }
}
