//! 监听器注册表
//!
//! 事件名到条目集合的映射，另存一份首次注册顺序。条目按 id 存放：id 单调递增，
//! 因此按 id 排序即注册顺序，按 id 查找与取出都是对数复杂度。
//! 条目集合一旦为空，对应的键立即删除，注册表中不存在空集合。
//!
use crate::event_name::EventName;
use crate::listener::{Listener, ListenerEntry};
use std::collections::{BTreeMap, HashMap};

type Entries<A> = BTreeMap<u64, ListenerEntry<A>>;

pub(crate) struct Registry<A> {
    by_name: HashMap<EventName, Entries<A>>,
    order: Vec<EventName>,
}

impl<A> Default for Registry<A> {
    fn default() -> Self {
        Self {
            by_name: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<A> Registry<A> {
    fn drop_if_empty(&mut self, name: &str) {
        if self.by_name.get(name).is_some_and(BTreeMap::is_empty) {
            self.by_name.remove(name);
            self.order.retain(|n| n != name);
        }
    }

    /// 追加条目，返回追加后该事件的条目数
    pub(crate) fn push(&mut self, name: &EventName, entry: ListenerEntry<A>) -> usize {
        if !self.by_name.contains_key(name.as_str()) {
            self.order.push(name.clone());
        }
        let entries = self.by_name.entry(name.clone()).or_default();
        entries.insert(entry.id, entry);
        entries.len()
    }

    /// 该事件条目的快照，按注册顺序
    pub(crate) fn snapshot(&self, name: &str) -> Option<Vec<ListenerEntry<A>>> {
        self.by_name
            .get(name)
            .map(|entries| entries.values().cloned().collect())
    }

    pub(crate) fn contains_entry(&self, name: &str, id: u64) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|entries| entries.contains_key(&id))
    }

    /// 按 id 取出单个条目，返回是否确实取出
    pub(crate) fn take_entry(&mut self, name: &str, id: u64) -> bool {
        let taken = self
            .by_name
            .get_mut(name)
            .and_then(|entries| entries.remove(&id))
            .is_some();
        if taken {
            self.drop_if_empty(name);
        }
        taken
    }

    /// 移除所有回调与 `listener` 相同的条目，返回移除数量
    pub(crate) fn remove_listener(&mut self, name: &str, listener: &Listener<A>) -> usize {
        let Some(entries) = self.by_name.get_mut(name) else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|_, entry| !entry.listener.ptr_eq(listener));
        let removed = before - entries.len();
        self.drop_if_empty(name);
        removed
    }

    /// 删除整个事件，返回被删除的条目数
    pub(crate) fn remove_event(&mut self, name: &str) -> usize {
        match self.by_name.remove(name) {
            Some(entries) => {
                self.order.retain(|n| n != name);
                entries.len()
            }
            None => 0,
        }
    }

    pub(crate) fn clear(&mut self) -> usize {
        let total = self.total();
        self.by_name.clear();
        self.order.clear();
        total
    }

    pub(crate) fn listeners(&self, name: &str) -> Vec<Listener<A>> {
        self.by_name
            .get(name)
            .map(|entries| {
                entries
                    .values()
                    .map(|entry| entry.listener.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn all_listeners(&self) -> Vec<(EventName, Vec<Listener<A>>)> {
        self.order
            .iter()
            .map(|name| (name.clone(), self.listeners(name.as_str())))
            .collect()
    }

    pub(crate) fn event_names(&self) -> Vec<EventName> {
        self.order.clone()
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.by_name.get(name).map_or(0, BTreeMap::len)
    }

    pub(crate) fn total(&self) -> usize {
        self.by_name.values().map(BTreeMap::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
