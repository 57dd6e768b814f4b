//! Core traits every concrete problem family implements.

/// Dense index of an element within its [`Instance`].
///
/// Element payloads live in the instance; solutions, selectors and trail
/// tables refer to elements only through this index.
pub type ElementId = usize;

/// Fixed input data of one problem to solve.
///
/// An instance owns its elements and any constraint scalars (capacity,
/// number of labels, ...). It never changes after construction.
pub trait Instance {
    /// Problem-defined payload of a single element.
    type Element;

    /// The solution type bound to this instance.
    type Solution: Solution;

    /// All elements, indexed by [`ElementId`].
    fn elements(&self) -> &[Self::Element];

    /// Number of elements in the instance.
    fn num_elements(&self) -> usize {
        self.elements().len()
    }

    /// Returns the element with the given id.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    fn element(&self, id: ElementId) -> &Self::Element {
        &self.elements()[id]
    }

    /// Creates an empty solution where every element is a candidate.
    fn initialize_solution(&self) -> Self::Solution;
}

/// Mutable state of one construction attempt.
///
/// Every element of the instance is in exactly one of three sets:
/// accepted, visited (considered and rejected) or candidate.
///
/// `Clone` must produce a fully independent copy; the engine clones at
/// every branch point (beam children, pilot simulations).
pub trait Solution: Clone {
    /// Accepted elements in acceptance order.
    fn accepted(&self) -> &[ElementId];

    /// Elements still open for selection. Order is unspecified.
    fn candidates(&self) -> &[ElementId];

    /// Elements considered and rejected. Order is unspecified.
    fn visited(&self) -> &[ElementId];

    /// Moves a candidate into the accepted set and updates the aggregates.
    ///
    /// The caller is responsible for checking feasibility first.
    ///
    /// # Panics
    /// Panics if `element` is not a candidate.
    fn add_element_to_solution(&mut self, element: ElementId);

    /// Moves a candidate into the visited set without accepting it.
    ///
    /// # Panics
    /// Panics if `element` is not a candidate.
    fn add_element_to_visited(&mut self, element: ElementId);

    /// Running objective aggregate. Lower is better.
    fn objective_value(&self) -> f64;

    /// Running resource usage aggregate (weight, labels used, ...).
    fn resource_usage(&self) -> f64;
}

/// The evaluation and feasibility rules of a problem.
///
/// All algorithms **minimize** the objective. Maximization problems
/// negate their natural objective.
///
/// # Examples
///
/// ```ignore
/// impl Problem for KnapsackProblem {
///     type Instance = KnapsackInstance;
///     type Solution = KnapsackSolution;
///
///     fn objective_value(&self, solution: &KnapsackSolution) -> f64 {
///         -solution.accepted().iter().map(|&e| self.value(e)).sum::<f64>()
///     }
///     // ...
/// }
/// ```
pub trait Problem {
    /// The instance type this problem is solved on.
    type Instance: Instance<Solution = Self::Solution>;

    /// The solution type produced by construction.
    type Solution: Solution;

    /// Recomputes the objective from scratch over the accepted set.
    fn objective_value(&self, solution: &Self::Solution) -> f64;

    /// Objective the solution would have after accepting `element`.
    ///
    /// Must agree with [`Problem::objective_value`] recomputed after the
    /// element is accepted.
    fn objective_value_with(&self, solution: &Self::Solution, element: ElementId) -> f64;

    /// Whether `element` may be accepted into `solution`.
    fn is_valid(
        &self,
        instance: &Self::Instance,
        solution: &Self::Solution,
        element: ElementId,
    ) -> bool;

    /// Whether the construction of `solution` is finished.
    fn is_complete(&self, instance: &Self::Instance, solution: &Self::Solution) -> bool;

    /// Whether accepting `element` would make `solution` complete.
    fn element_complete_solution(
        &self,
        instance: &Self::Instance,
        solution: &Self::Solution,
        element: ElementId,
    ) -> bool;

    /// Problem-defined quality of a candidate. Higher is better.
    ///
    /// Selectors rank and weight candidates by this value.
    fn element_quality(
        &self,
        instance: &Self::Instance,
        solution: &Self::Solution,
        element: ElementId,
    ) -> f64;
}
