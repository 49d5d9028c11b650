//! Page-local entity lists.
//!
//! Every page that lists records owns an [`EntityList`] seeded from a
//! constant. Lists are never persisted; entering the page again starts from
//! the seed.

/// A record that can live in an [`EntityList`].
pub trait Entity: Clone {
    fn id(&self) -> u32;

    /// Text fields matched by [`EntityList::search`].
    fn search_fields(&self) -> Vec<&str>;
}

/// A record with a two-valued status flag.
pub trait Toggle {
    /// Returns a copy that differs only in the status flag.
    fn toggled(&self) -> Self;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityList<T> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: Entity> EntityList<T> {
    /// Starts a list from seed records. Ids handed out by [`EntityList::add`]
    /// continue after the largest seeded id.
    pub fn seeded(seed: Vec<T>) -> Self {
        let next_id = seed.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            items: seed,
            next_id,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Id the next added record will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Appends the record built for a fresh id and returns that id. A failing
    /// builder leaves the list and the id counter untouched.
    pub fn add<E>(&mut self, build: impl FnOnce(u32) -> Result<T, E>) -> Result<u32, E> {
        let id = self.next_id;
        let record = build(id)?;
        self.items.push(record);
        self.next_id += 1;
        Ok(id)
    }

    /// Removes the record with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: u32) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(position))
    }

    /// Replaces the record with `id` by `update(record)`.
    pub fn update(&mut self, id: u32, update: impl FnOnce(&T) -> T) -> Option<&T> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        *item = update(item);
        Some(&*item)
    }

    /// Case-insensitive substring match over each record's search fields.
    /// An empty (or blank) term matches everything.
    pub fn search(&self, term: &str) -> Vec<&T> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| {
                item.search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            })
            .collect()
    }
}

impl<T: Entity + Toggle> EntityList<T> {
    pub fn toggle_status(&mut self, id: u32) -> Option<&T> {
        self.update(id, Toggle::toggled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Doctor, DoctorForm, DoctorStatus};
    use crate::seed;
    use std::convert::Infallible;

    fn doctors() -> EntityList<Doctor> {
        EntityList::seeded(seed::doctors())
    }

    fn form(name: &str) -> DoctorForm {
        DoctorForm {
            name: name.to_string(),
            email: "new.doctor@hospital.com".to_string(),
            phone: "+1 (555) 999-0000".to_string(),
            specialization: "Cardiology".to_string(),
            experience: "1 year".to_string(),
            location: "Building A, Floor 4".to_string(),
        }
    }

    #[test]
    fn test_add_appends_submitted_values() {
        let mut list = doctors();
        let before = list.len();
        let id = list.add(|id| Doctor::from_form(id, &form("Dr. New"))).unwrap();

        assert_eq!(list.len(), before + 1);
        let added = list.items().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.name, "Dr. New");
        assert_eq!(added.location, "Building A, Floor 4");
        assert_eq!(added.status, DoctorStatus::Active);
    }

    #[test]
    fn test_failed_add_keeps_list_and_counter() {
        let mut list = doctors();
        let next = list.next_id();
        assert!(list.add(|id| Doctor::from_form(id, &form(""))).is_err());
        assert_eq!(list.len(), 5);
        assert_eq!(list.next_id(), next);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = doctors();
        let before = list.clone();
        assert!(list.delete(42).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_then_add_never_reuses_ids() {
        let mut list = doctors();
        assert_eq!(list.delete(3).map(|d| d.id), Some(3));
        let id = list.add(|id| Doctor::from_form(id, &form("Dr. Late"))).unwrap();

        assert_eq!(list.len(), 5);
        assert_eq!(id, 6);
        let ids: Vec<u32> = list.items().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut list = doctors();
        let original = list.get(4).unwrap().clone();
        assert_eq!(list.toggle_status(4).unwrap().status, DoctorStatus::Active);
        assert_eq!(list.toggle_status(4).unwrap(), &original);
        assert!(list.toggle_status(99).is_none());
    }

    #[test]
    fn test_search() {
        let list = doctors();
        assert_eq!(list.search("").len(), list.len());
        assert_eq!(list.search("   ").len(), list.len());
        assert!(list.search("zzz-nothing").is_empty());

        let cardio = list.search("CARDIO");
        assert_eq!(cardio.len(), 1);
        assert_eq!(cardio[0].name, "Dr. John Smith");

        // matches on email
        assert_eq!(list.search("sarah.johnson@").len(), 1);
    }

    #[test]
    fn test_seeded_empty_starts_at_one() {
        let mut list: EntityList<Doctor> = EntityList::seeded(vec![]);
        assert!(list.is_empty());
        let id = list
            .add(|id| Ok::<_, Infallible>(Doctor { id, ..seed::doctors()[0].clone() }))
            .unwrap();
        assert_eq!(id, 1);
    }
}
