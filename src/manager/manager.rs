use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use super::managererror::ManagerError;

/// Mutable staging area used while objects are parsed.
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, value: Arc<V>) -> Result<(), ManagerError> {
        if self.map.contains_key(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        self.map.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    pub fn build(self) -> Manager<V> {
        Manager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

/// Read-only name -> object map, shareable across threads when `V` is.
pub struct Manager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> Manager<V> {
    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.map.keys().collect();
        names.sort();
        names
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<V>> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub trait IManager<V: ?Sized> {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<V>,
                            json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self,
                                builder: &mut ManagerBuilder<V>,
                                json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(builder, j.clone())?;
        }
        Ok(())
    }

    fn from_reader(&self,
                   builder: &mut ManagerBuilder<V>,
                   file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(builder, &json_array),
            json_object => self.insert_obj_from_json(builder, json_object)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_duplicate_names() {
        let mut builder: ManagerBuilder<str> = ManagerBuilder::new();
        builder.insert("a".to_owned(), Arc::from("first")).unwrap();
        assert!(matches!(
            builder.insert("a".to_owned(), Arc::from("second")),
            Err(ManagerError::DuplicateNameError(name)) if name == "a"
        ));
    }

    #[test]
    fn frozen_manager_lookup() {
        let mut builder: ManagerBuilder<str> = ManagerBuilder::new();
        builder.insert("b".to_owned(), Arc::from("two")).unwrap();
        builder.insert("a".to_owned(), Arc::from("one")).unwrap();
        let manager = builder.build();
        assert_eq!(&*manager.get("a").unwrap(), "one");
        assert!(manager.get("c").is_err());
        assert_eq!(manager.names(), vec!["a", "b"]);
        assert_eq!(manager.len(), 2);
    }
}
