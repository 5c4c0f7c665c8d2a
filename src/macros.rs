/// Names the coproduct of a list of up to nine case types.
///
/// Expands to the family member of the matching arity, so the result is an
/// ordinary enum type usable anywhere a type is expected.
///
/// # Examples
///
/// ```rust
/// use coprod::{Coproduct, Coproduct2};
///
/// type IntOrText = Coproduct![i64, &'static str];
///
/// let value: IntOrText = Coproduct2::First(3);
/// assert!(value.is_first());
/// ```
#[macro_export]
macro_rules! Coproduct {
    [] => [$crate::Coproduct0];
    [$t1:ty $(,)?] => [$crate::Coproduct1<$t1>];
    [$t1:ty, $t2:ty $(,)?] => [$crate::Coproduct2<$t1, $t2>];
    [$t1:ty, $t2:ty, $t3:ty $(,)?] => [$crate::Coproduct3<$t1, $t2, $t3>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty $(,)?] => [$crate::Coproduct4<$t1, $t2, $t3, $t4>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty $(,)?] =>
        [$crate::Coproduct5<$t1, $t2, $t3, $t4, $t5>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty, $t6:ty $(,)?] =>
        [$crate::Coproduct6<$t1, $t2, $t3, $t4, $t5, $t6>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty, $t6:ty, $t7:ty $(,)?] =>
        [$crate::Coproduct7<$t1, $t2, $t3, $t4, $t5, $t6, $t7>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty, $t6:ty, $t7:ty, $t8:ty $(,)?] =>
        [$crate::Coproduct8<$t1, $t2, $t3, $t4, $t5, $t6, $t7, $t8>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty, $t6:ty, $t7:ty, $t8:ty, $t9:ty $(,)?] =>
        [$crate::Coproduct9<$t1, $t2, $t3, $t4, $t5, $t6, $t7, $t8, $t9>];
}
