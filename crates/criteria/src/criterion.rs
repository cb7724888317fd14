use forgetender_core::{
    rules, AggregateRoot, CriterionId, CriterionRelatesTo, DomainError, DomainResult, ItemId,
    LotId, RequirementDataType, RequirementGroupId, RequirementId,
};
use forgetender_requests::{RawCriterion, RawRequirement, RawRequirementGroup};

/// A single requirement a tenderer must respond to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub id: RequirementId,
    pub title: String,
    pub description: Option<String>,
    pub data_type: RequirementDataType,
}

impl Requirement {
    fn try_create(path: &str, raw: &RawRequirement) -> DomainResult<Self> {
        Ok(Self {
            id: RequirementId::parse(&format!("{path}.id"), &raw.id)?,
            title: rules::non_blank(&format!("{path}.title"), &raw.title)?,
            description: raw.description.clone(),
            data_type: RequirementDataType::parse(&format!("{path}.dataType"), &raw.data_type)?,
        })
    }
}

/// A group of requirements; a tenderer answers one group of a criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementGroup {
    pub id: RequirementGroupId,
    pub description: Option<String>,
    pub requirements: Vec<Requirement>,
}

impl RequirementGroup {
    fn try_create(path: &str, raw: &RawRequirementGroup) -> DomainResult<Self> {
        let id = RequirementGroupId::parse(&format!("{path}.id"), &raw.id)?;

        let requirements_path = format!("{path}.requirements");
        rules::non_empty(&requirements_path, &raw.requirements)?;

        let mut requirements = Vec::with_capacity(raw.requirements.len());
        for (i, raw_requirement) in raw.requirements.iter().enumerate() {
            requirements.push(Requirement::try_create(
                &format!("{requirements_path}[{i}]"),
                raw_requirement,
            )?);
        }

        Ok(Self {
            id,
            description: raw.description.clone(),
            requirements,
        })
    }
}

/// What a criterion applies to, with the referenced identifier already
/// parsed. Whether an `Item`/`Lot` reference names a declared entity is
/// checked by the tender, where the declared sets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionRelation {
    Tenderer,
    Tender,
    Lot(LotId),
    Item(ItemId),
}

impl CriterionRelation {
    pub fn relates_to(&self) -> CriterionRelatesTo {
        match self {
            Self::Tenderer => CriterionRelatesTo::Tenderer,
            Self::Tender => CriterionRelatesTo::Tender,
            Self::Lot(_) => CriterionRelatesTo::Lot,
            Self::Item(_) => CriterionRelatesTo::Item,
        }
    }
}

/// Aggregate root: one exchange criterion of a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    id: CriterionId,
    title: String,
    description: Option<String>,
    relation: CriterionRelation,
    requirement_groups: Vec<RequirementGroup>,
}

impl Criterion {
    /// Validate a raw criterion into an aggregate.
    ///
    /// `allowed_relations` is the calling operation's allow-set for the
    /// `relatesTo` code. Requirement ids must be unique across the whole
    /// criterion, not just within their group.
    pub fn try_create(
        path: &str,
        raw: &RawCriterion,
        allowed_relations: &[CriterionRelatesTo],
    ) -> DomainResult<Self> {
        let id = CriterionId::parse(&format!("{path}.id"), &raw.id)?;
        let title = rules::non_blank(&format!("{path}.title"), &raw.title)?;

        let relates_to = CriterionRelatesTo::parse_allowed(
            &format!("{path}.relatesTo"),
            &raw.relates_to,
            allowed_relations,
        )?;
        let relation = Self::resolve_relation(path, relates_to, raw.related_item.as_deref())?;

        let groups_path = format!("{path}.requirementGroups");
        rules::non_empty(&groups_path, &raw.requirement_groups)?;

        let mut requirement_groups = Vec::with_capacity(raw.requirement_groups.len());
        for (i, raw_group) in raw.requirement_groups.iter().enumerate() {
            requirement_groups.push(RequirementGroup::try_create(
                &format!("{groups_path}[{i}]"),
                raw_group,
            )?);
        }
        rules::unique_by(&groups_path, &requirement_groups, |group| group.id.clone())?;

        let all_requirements: Vec<&Requirement> = requirement_groups
            .iter()
            .flat_map(|group| group.requirements.iter())
            .collect();
        rules::unique_by(
            &format!("{groups_path}[].requirements"),
            &all_requirements,
            |requirement| requirement.id.clone(),
        )?;

        Ok(Self {
            id,
            title,
            description: raw.description.clone(),
            relation,
            requirement_groups,
        })
    }

    fn resolve_relation(
        path: &str,
        relates_to: CriterionRelatesTo,
        related_item: Option<&str>,
    ) -> DomainResult<CriterionRelation> {
        let related_path = format!("{path}.relatedItem");
        match relates_to {
            CriterionRelatesTo::Item => {
                let raw = related_item.ok_or_else(|| {
                    DomainError::incorrect_attribute(
                        &related_path,
                        "is mandatory when relatesTo is 'item'",
                    )
                })?;
                Ok(CriterionRelation::Item(ItemId::parse(&related_path, raw)?))
            }
            CriterionRelatesTo::Lot => {
                let raw = related_item.ok_or_else(|| {
                    DomainError::incorrect_attribute(
                        &related_path,
                        "is mandatory when relatesTo is 'lot'",
                    )
                })?;
                Ok(CriterionRelation::Lot(LotId::parse(&related_path, raw)?))
            }
            CriterionRelatesTo::Tenderer | CriterionRelatesTo::Tender => {
                if related_item.is_some() {
                    return Err(DomainError::incorrect_attribute(
                        &related_path,
                        "must be absent when the criterion relates to the whole tender or tenderer",
                    ));
                }
                Ok(match relates_to {
                    CriterionRelatesTo::Tenderer => CriterionRelation::Tenderer,
                    _ => CriterionRelation::Tender,
                })
            }
        }
    }

    pub fn id_typed(&self) -> &CriterionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn relation(&self) -> &CriterionRelation {
        &self.relation
    }

    pub fn requirement_groups(&self) -> &[RequirementGroup] {
        &self.requirement_groups
    }
}

impl AggregateRoot for Criterion {
    type Id = CriterionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
