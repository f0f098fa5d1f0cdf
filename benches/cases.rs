// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use atelier::model::{
    EntityCollection, Project, ProjectId, ProjectSettings, UuidIdGenerator,
};
use atelier::shell::NoopWorkflowResources;
use atelier::state::{AppState, AppStore};
use atelier::storage::InMemoryWidgetDataStorageManager;
use atelier::usecase::ProjectManagerUseCases;

fn project(index: usize) -> Project {
    Project::new(
        ProjectId::new(format!("P{index}")).expect("project id"),
        ProjectSettings::new(format!("Project {index}")),
    )
}

fn bench_collection_ops(c: &mut Criterion) {
    let collection = EntityCollection::from_entities((0..1000).map(project));

    c.bench_function("collection_update_one_of_1000", |b| {
        b.iter_batched(
            || collection.clone(),
            |mut collection| {
                collection.update_one(&ProjectId::new("P500").expect("project id"), |project| {
                    project.set_settings(ProjectSettings::new("Renamed"));
                });
                collection
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("collection_clone_of_1000", |b| {
        b.iter(|| black_box(collection.clone()))
    });
}

fn bench_snapshot_clone(c: &mut Criterion) {
    let mut state = AppState::default();
    state
        .entities_mut()
        .projects_mut()
        .add_many((0..500).map(project));

    c.bench_function("app_state_clone_500_projects", |b| {
        b.iter(|| black_box(state.clone()))
    });
}

fn bench_project_manager_commit(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    c.bench_function("project_manager_commit_20_new_projects", |b| {
        b.iter_batched(
            || {
                let store = Arc::new(AppStore::new(AppState::default()));
                let use_cases = ProjectManagerUseCases::new(
                    store.clone(),
                    Arc::new(UuidIdGenerator),
                    Arc::new(InMemoryWidgetDataStorageManager::new()),
                    Arc::new(NoopWorkflowResources),
                );
                use_cases.open();
                for _ in 0..20 {
                    let _ = use_cases.add_project();
                }
                use_cases
            },
            |use_cases| runtime.block_on(use_cases.save_changes()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_collection_ops,
    bench_snapshot_clone,
    bench_project_manager_commit
);
criterion_main!(benches);
