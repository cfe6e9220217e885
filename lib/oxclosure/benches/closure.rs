//! Closure cost on wide and deep class hierarchies.
//!
//! Run with: cargo bench -p oxclosure closure

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use oxclosure::{ClassHierarchy, ClosureOptions, TraversalMode, closure};
use oxrdf::vocab::rdfs;
use oxrdf::{Graph, NamedNode, Term, TripleRef};

fn class(i: usize) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.org/class{i}"))
}

/// A complete tree with the given fan-out where every class also has an equivalent twin.
fn tree_graph(size: usize, fan_out: usize) -> Graph {
    let equivalent_class = oxclosure::vocab::owl::EQUIVALENT_CLASS;
    let mut graph = Graph::new();
    for i in 1..size {
        let child = class(i);
        graph.insert(TripleRef::new(
            child.as_ref(),
            rdfs::SUB_CLASS_OF,
            class((i - 1) / fan_out).as_ref(),
        ));
        graph.insert(TripleRef::new(
            NamedNode::new_unchecked(format!("{}_twin", child.as_str())).as_ref(),
            equivalent_class,
            child.as_ref(),
        ));
    }
    graph
}

fn closure_on_graph(c: &mut Criterion) {
    for (name, fan_out) in [("wide", 64), ("deep", 1)] {
        let mut group = c.benchmark_group(format!("closure {name}"));
        for size in [100, 1_000, 10_000] {
            let graph = tree_graph(size, fan_out);
            let hierarchy = ClassHierarchy::from_graph(&graph);
            let start = Term::from(class(0));
            group.throughput(Throughput::Elements(size as u64));
            for mode in [
                TraversalMode::SubclassesOnly,
                TraversalMode::IncludeEquivalents,
            ] {
                let options = ClosureOptions::default().with_mode(mode);
                group.bench_with_input(
                    BenchmarkId::new(format!("graph {mode}"), size),
                    &start,
                    |b, start| b.iter(|| closure(&graph, start.clone(), options).unwrap()),
                );
                group.bench_with_input(
                    BenchmarkId::new(format!("hierarchy {mode}"), size),
                    &start,
                    |b, start| b.iter(|| closure(&hierarchy, start.clone(), options).unwrap()),
                );
            }
        }
        group.finish();
    }
}

criterion_group!(closure_benches, closure_on_graph);
criterion_main!(closure_benches);
