use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::domain::resource::iot_device::IoTDevice;
use crate::domain::resource::resource_node::ResourceNode;
use crate::domain::service::Service;
use crate::domain::utils::id::{IoTDeviceId, ResourceNodeId};
use crate::error::{Error, Result};

new_key_type! {
    pub struct ResourceNodeKey;
    pub struct IoTDeviceKey;
}

/// Owns the hosting topology: resource nodes and IoT devices.
///
/// Not internally synchronized; wrap it in a lock before sharing it mutably.
#[derive(Debug, Default, Clone)]
pub struct ResourceStore {
    nodes: SlotMap<ResourceNodeKey, ResourceNode>,
    devices: SlotMap<IoTDeviceKey, IoTDevice>,

    node_index: HashMap<ResourceNodeId, ResourceNodeKey>,
    device_index: HashMap<IoTDeviceId, IoTDeviceKey>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    //---------------------
    // --- Node Methods ---
    //---------------------

    /// Registers `node`. A node with the same id replaces the previous one.
    pub fn add_node(&mut self, node: ResourceNode) -> ResourceNodeKey {
        let node_id = node.id;
        if let Some(old_key) = self.node_index.remove(&node_id) {
            log::warn!("ResourceNode {} registered twice, replacing the previous entry.", node_id);
            self.nodes.remove(old_key);
        }

        let key = self.nodes.insert(node);
        self.node_index.insert(node_id, key);
        key
    }

    pub fn get_node(&self, node_id: ResourceNodeId) -> Option<&ResourceNode> {
        self.node_index.get(&node_id).and_then(|key| self.nodes.get(*key))
    }

    pub fn get_node_mut(&mut self, node_id: ResourceNodeId) -> Option<&mut ResourceNode> {
        let key = *self.node_index.get(&node_id)?;
        self.nodes.get_mut(key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.values()
    }

    pub fn get_num_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_total_node_capacity(&self) -> f64 {
        self.nodes.values().map(|node| node.capacity).sum()
    }

    /// Hosts `service` on the node `node_id`.
    ///
    /// If the service is currently hosted on a different node of this store,
    /// it is detached there first, so at most one node lists it.
    pub fn host_service(&mut self, node_id: ResourceNodeId, service: &mut Service) -> Result<()> {
        if !self.node_index.contains_key(&node_id) {
            return Err(Error::UnknownResourceNode(node_id));
        }

        if let Some(previous_id) = service.hosting_node.filter(|previous_id| *previous_id != node_id) {
            if let Some(previous) = self.get_node_mut(previous_id) {
                previous.remove_service(service.id);
                log::debug!("Service {} moved from ResourceNode {} to {}.", service.id, previous_id, node_id);
            }
        }

        let node = self.get_node_mut(node_id).ok_or(Error::UnknownResourceNode(node_id))?;
        node.add_service(service);
        Ok(())
    }

    //-----------------------
    // --- Device Methods ---
    //-----------------------

    pub fn add_device(&mut self, device: IoTDevice) -> IoTDeviceKey {
        let device_id = device.id;
        if let Some(old_key) = self.device_index.remove(&device_id) {
            log::warn!("IoTDevice {} registered twice, replacing the previous entry.", device_id);
            self.devices.remove(old_key);
        }

        let key = self.devices.insert(device);
        self.device_index.insert(device_id, key);
        key
    }

    pub fn get_device(&self, device_id: IoTDeviceId) -> Option<&IoTDevice> {
        self.device_index.get(&device_id).and_then(|key| self.devices.get(*key))
    }

    pub fn devices(&self) -> impl Iterator<Item = &IoTDevice> {
        self.devices.values()
    }

    pub fn get_num_of_devices(&self) -> usize {
        self.devices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils::id::ServiceId;

    fn store_with_two_nodes() -> ResourceStore {
        let mut store = ResourceStore::new();
        store.add_node(ResourceNode::new(ResourceNodeId::new(1), "us-west", 4.0));
        store.add_node(ResourceNode::new(ResourceNodeId::new(2), "eu-central", 8.0));
        store
    }

    #[test]
    fn test_host_service_sets_relation() {
        let mut store = store_with_two_nodes();
        let mut service = Service::new(ServiceId::new(5), 1.0, 10.0, 0.9, 0.2);

        store.host_service(ResourceNodeId::new(1), &mut service).unwrap();

        assert_eq!(service.hosting_node, Some(ResourceNodeId::new(1)));
        assert!(store.get_node(ResourceNodeId::new(1)).unwrap().hosts(service.id));
    }

    #[test]
    fn test_rehosting_detaches_previous_node() {
        let mut store = store_with_two_nodes();
        let mut service = Service::new(ServiceId::new(5), 1.0, 10.0, 0.9, 0.2);

        store.host_service(ResourceNodeId::new(1), &mut service).unwrap();
        store.host_service(ResourceNodeId::new(2), &mut service).unwrap();

        assert_eq!(service.hosting_node, Some(ResourceNodeId::new(2)));
        assert!(!store.get_node(ResourceNodeId::new(1)).unwrap().hosts(service.id));
        assert!(store.get_node(ResourceNodeId::new(2)).unwrap().hosts(service.id));
    }

    #[test]
    fn test_host_on_unknown_node_fails() {
        let mut store = store_with_two_nodes();
        let mut service = Service::new(ServiceId::new(5), 1.0, 10.0, 0.9, 0.2);

        let result = store.host_service(ResourceNodeId::new(99), &mut service);

        assert!(matches!(result, Err(Error::UnknownResourceNode(id)) if id == ResourceNodeId::new(99)));
        assert_eq!(service.hosting_node, None);
    }

    #[test]
    fn test_aggregates_and_replacement() {
        let mut store = store_with_two_nodes();
        assert_eq!(store.get_num_of_nodes(), 2);
        assert_eq!(store.get_total_node_capacity(), 12.0);

        store.add_node(ResourceNode::new(ResourceNodeId::new(2), "ap-south", 1.0));
        assert_eq!(store.get_num_of_nodes(), 2);
        assert_eq!(store.get_node(ResourceNodeId::new(2)).unwrap().location, "ap-south");
    }

    #[test]
    fn test_devices() {
        let mut store = ResourceStore::new();
        store.add_device(IoTDevice::with_energy(IoTDeviceId::new(1), 0.4, true));

        let device = store.get_device(IoTDeviceId::new(1)).unwrap();
        assert!(device.local_renewable);
        assert_eq!(store.get_num_of_devices(), 1);
        assert!(store.get_device(IoTDeviceId::new(2)).is_none());
    }
}
