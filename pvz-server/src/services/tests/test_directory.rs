use super::*;


#[tokio::test]
async fn test_create_and_get_pickup_point() {
    let (_dir, pool) = open_test_db().await;
    let directory = PickupPointService::new(pool.clone());

    let created = directory
        .create(PickupPointCreate {
            label: "Arbat 12".to_string(),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.label, "Arbat 12");
    assert!(created.created_at > 0);
    assert_eq!(created.updated_at, created.created_at);

    let fetched = directory.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.label, "Arbat 12");
}


#[tokio::test]
async fn test_get_unknown_pickup_point() {
    let (_dir, pool) = open_test_db().await;
    let directory = PickupPointService::new(pool.clone());

    let err = directory.get_by_id(404).await.unwrap_err();
    assert!(matches!(err, ServiceError::PickupPointNotFound(404)));
}


#[tokio::test]
async fn test_list_pagination() {
    let (_dir, pool) = open_test_db().await;
    let directory = PickupPointService::new(pool.clone());

    for label in ["Alpha", "Bravo", "Charlie"] {
        directory
            .create(PickupPointCreate {
                label: label.to_string(),
            })
            .await
            .unwrap();
    }

    // 列表按标签排序
    let page1 = directory.list(2, 0).await.unwrap();
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0].label, "Alpha");
    assert_eq!(page1[1].label, "Bravo");

    let page2 = directory.list(2, 2).await.unwrap();
    assert_eq!(page2.len(), 1);
    assert_eq!(page2[0].label, "Charlie");
}


#[tokio::test]
async fn test_update_label() {
    let (_dir, pool) = open_test_db().await;
    let directory = PickupPointService::new(pool.clone());

    let created = directory
        .create(PickupPointCreate {
            label: "Old Label".to_string(),
        })
        .await
        .unwrap();

    let updated = directory
        .update(
            created.id,
            PickupPointUpdate {
                label: Some("New Label".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "New Label");
    assert!(updated.updated_at >= created.updated_at);

    // label 为 None 时保持原值
    let same = directory
        .update(created.id, PickupPointUpdate { label: None })
        .await
        .unwrap();
    assert_eq!(same.label, "New Label");

    let err = directory
        .update(
            404,
            PickupPointUpdate {
                label: Some("Ghost".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PickupPointNotFound(404)));
}


#[tokio::test]
async fn test_delete_pickup_point() {
    let (_dir, pool) = open_test_db().await;
    let directory = PickupPointService::new(pool.clone());

    let created = directory
        .create(PickupPointCreate {
            label: "Ephemeral".to_string(),
        })
        .await
        .unwrap();

    directory.delete(created.id).await.unwrap();

    let err = directory.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::PickupPointNotFound(_)));

    // 再删报同样的错
    let err = directory.delete(created.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::PickupPointNotFound(_)));
}


#[tokio::test]
async fn test_delete_refused_while_receptions_exist() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Busy Point").await;
    let directory = PickupPointService::new(pool.clone());
    let receptions = ReceptionService::new(pool.clone());

    receptions.open(point_id).await.unwrap();

    let err = directory.delete(point_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::PickupPointHasReceptions(id) if id == point_id));

    // 关掉的收货单仍然引用自提点，删除照样拒绝
    receptions.close(point_id).await.unwrap();
    let err = directory.delete(point_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::PickupPointHasReceptions(_)));

    // 自提点还在
    assert!(directory.get_by_id(point_id).await.is_ok());
}
