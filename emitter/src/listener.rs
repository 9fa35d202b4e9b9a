//! 监听器（Listener）
//!
//! 对回调的引用计数句柄。相等性按引用身份判断：同一个 `Listener` 的克隆彼此相等，
//! 即便两个闭包的代码完全相同，分别构造出来的 `Listener` 也互不相等。
//!
use std::fmt;
use std::rc::Rc;

type Callback<A> = dyn Fn(&A) -> anyhow::Result<()>;

/// 事件监听器：接收事件载荷的引用
pub struct Listener<A> {
    callback: Rc<Callback<A>>,
}

impl<A> Listener<A> {
    /// 由可失败的闭包创建，返回的错误会中止本次分发并透传给 `emit` 调用方
    ///
    /// ```
    /// use emitter::Listener;
    ///
    /// let positive = Listener::new(|n: &i32| {
    ///     anyhow::ensure!(*n > 0, "expected a positive number");
    ///     Ok(())
    /// });
    /// assert!(positive.call(&1).is_ok());
    /// assert!(positive.call(&-1).is_err());
    /// ```
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&A) -> anyhow::Result<()> + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// 由不会失败的闭包创建
    pub fn infallible<F>(callback: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        Self::new(move |args: &A| {
            callback(args);
            Ok(())
        })
    }

    /// 直接调用回调
    pub fn call(&self, args: &A) -> anyhow::Result<()> {
        (self.callback)(args)
    }

    /// 是否指向同一个回调
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// 注册表中的监听条目：`id` 在单个发射器内单调递增，用于分发时的存活判断
pub(crate) struct ListenerEntry<A> {
    pub(crate) id: u64,
    pub(crate) listener: Listener<A>,
    pub(crate) once: bool,
}

impl<A> Clone for ListenerEntry<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: self.listener.clone(),
            once: self.once,
        }
    }
}
