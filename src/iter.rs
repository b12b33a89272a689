use crate::core::DynArr;

/// Iterator over elements in a `DynArr`, front to back.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DynArrIter<'a, T> {
    elements: std::slice::Iter<'a, T>,
}

impl<T: Copy> Iterator for DynArrIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for DynArrIter<'_, T> {}

impl<'a, T: Copy + Default> IntoIterator for &'a DynArr<T> {
    type Item = T;
    type IntoIter = DynArrIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DynArrIter {
            elements: self.as_slice().iter(),
        }
    }
}

/// Iterator over elements in a `DynArr` in pop order, back to front.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DynArrRevIter<'a, T> {
    elements: std::slice::Iter<'a, T>,
}

impl<'a, T: Copy + Default> DynArrRevIter<'a, T> {
    pub(crate) fn new(arr: &'a DynArr<T>) -> Self {
        Self {
            elements: arr.as_slice().iter(),
        }
    }
}

impl<T: Copy> Iterator for DynArrRevIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next_back().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for DynArrRevIter<'_, T> {}
