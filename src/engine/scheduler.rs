// ABOUTME: Dependency graph management and execution order resolution
// ABOUTME: Handles topological sorting, cycle detection, and dependency validation

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use petgraph::{Direction, Graph};
use std::collections::VecDeque;

use super::error::{ExecutionError, Result};
use super::task::Task;

/// Directed graph over a task set where an edge dependency -> dependent
/// means the dependent must be ordered after the dependency.
pub struct DependencyGraph {
    graph: Graph<String, ()>,
    task_indices: IndexMap<String, NodeIndex>,
}

pub struct DependencyScheduler;

impl DependencyGraph {
    /// Build the graph from a task set. Every dependency name must resolve
    /// to a task in the same set; unknown names are a configuration error.
    pub fn from_tasks(tasks: &IndexMap<String, Task>) -> Result<Self> {
        let mut graph = Graph::new();
        let mut task_indices = IndexMap::new();

        for name in tasks.keys() {
            let node_index = graph.add_node(name.clone());
            task_indices.insert(name.clone(), node_index);
        }

        for (name, task) in tasks {
            let task_node = task_indices[name];

            for dependency in &task.dependencies {
                if let Some(&dep_node) = task_indices.get(dependency) {
                    graph.add_edge(dep_node, task_node, ());
                } else {
                    return Err(ExecutionError::MissingDependencies {
                        names: vec![dependency.clone()],
                    });
                }
            }
        }

        Ok(Self {
            graph,
            task_indices,
        })
    }

    /// Compute a total execution order with Kahn's algorithm.
    ///
    /// Tie-break among simultaneously-ready tasks is the FIFO order of the
    /// ready queue, seeded and fed in task-map insertion order, so the
    /// output is deterministic for a given manifest.
    pub fn topological_order(&self) -> Result<Vec<String>> {
        let mut in_degree: IndexMap<NodeIndex, usize> = self
            .task_indices
            .values()
            .map(|&idx| {
                let degree = self
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count();
                (idx, degree)
            })
            .collect();

        let mut queue: VecDeque<NodeIndex> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&idx, _)| idx)
            .collect();

        let mut order = Vec::with_capacity(self.task_indices.len());

        while let Some(current) = queue.pop_front() {
            order.push(self.graph[current].clone());

            for dependent in self.graph.neighbors_directed(current, Direction::Outgoing) {
                let degree = in_degree
                    .get_mut(&dependent)
                    .ok_or_else(|| ExecutionError::TaskNotFound {
                        name: self.graph[dependent].clone(),
                    })?;
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if order.len() != self.task_indices.len() {
            // Everything still holding an unresolved dependency is part of
            // (or downstream of) a cycle.
            let stuck: Vec<String> = in_degree
                .iter()
                .filter(|(_, &degree)| degree > 0)
                .map(|(&idx, _)| self.graph[idx].clone())
                .collect();
            return Err(ExecutionError::CircularDependency { tasks: stuck });
        }

        Ok(order)
    }

    /// Tasks with no dependencies, in task-map insertion order.
    pub fn root_tasks(&self) -> Vec<String> {
        self.task_indices
            .iter()
            .filter(|(_, &idx)| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Direct dependents of the given task.
    pub fn dependents(&self, task_name: &str) -> Vec<String> {
        match self.task_indices.get(task_name) {
            Some(&idx) => self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .map(|dep| self.graph[dep].clone())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl DependencyScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a total execution order consistent with all dependencies.
    ///
    /// Dependency names are validated against the task set before the sort
    /// runs, so a dangling reference fails fast instead of masking a cycle.
    pub fn resolve_order(&self, tasks: &IndexMap<String, Task>) -> Result<Vec<String>> {
        let missing = self.validate_dependencies(tasks);
        if !missing.is_empty() {
            return Err(ExecutionError::MissingDependencies { names: missing });
        }

        let graph = DependencyGraph::from_tasks(tasks)?;
        graph.topological_order()
    }

    /// Pure check: every dependency name not present as a task-map key.
    /// Returns one entry per dangling reference, in declaration order.
    pub fn validate_dependencies(&self, tasks: &IndexMap<String, Task>) -> Vec<String> {
        let mut missing = Vec::new();

        for task in tasks.values() {
            for dependency in &task.dependencies {
                if !tasks.contains_key(dependency) {
                    missing.push(dependency.clone());
                }
            }
        }

        missing
    }

    /// Diagnostic: number of independent dependency chains, counted by
    /// depth-first traversal from every task with no dependencies. Reports
    /// a floor of 1 even for an empty task set.
    pub fn count_dependency_chains(&self, tasks: &IndexMap<String, Task>) -> usize {
        let graph = match DependencyGraph::from_tasks(tasks) {
            Ok(graph) => graph,
            Err(_) => return 1,
        };

        let mut visited = vec![false; graph.graph.node_count()];
        let mut chains = 0;

        for root in graph.root_tasks() {
            let root_idx = graph.task_indices[&root];
            if visited[root_idx.index()] {
                continue;
            }
            chains += 1;

            let mut stack = vec![root_idx];
            while let Some(current) = stack.pop() {
                if visited[current.index()] {
                    continue;
                }
                visited[current.index()] = true;
                stack.extend(
                    graph
                        .graph
                        .neighbors_directed(current, Direction::Outgoing),
                );
            }
        }

        chains.max(1)
    }
}

impl Default for DependencyScheduler {
    fn default() -> Self {
        Self::new()
    }
}
