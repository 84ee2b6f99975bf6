use super::*;


#[tokio::test]
async fn test_add_one_registers_product() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let receptions = ReceptionService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());

    let r = receptions.open(point_id).await.unwrap();
    let p = inventory.add_one(r.id, "electronics").await.unwrap();

    assert_eq!(p.reception_id, r.id);
    assert_eq!(p.product_type, ProductType::Electronics);
    assert!(p.id > 0);
    assert!(p.created_at > 0);

    let listed = inventory.list_by_reception(r.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, p.id);
}


#[tokio::test]
async fn test_add_one_unknown_reception() {
    let (_dir, pool) = open_test_db().await;
    let inventory = InventoryService::new(pool.clone());

    let err = inventory.add_one(404, "food").await.unwrap_err();
    assert!(matches!(err, ServiceError::ReceptionNotFound(404)));
}


#[tokio::test]
async fn test_add_one_invalid_type_writes_nothing() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    let err = inventory.add_one(reception_id, "furniture").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidProductType(ref t) if t == "furniture"));

    // 类型集合封闭且大小写敏感
    let err = inventory.add_one(reception_id, "Electronics").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidProductType(_)));

    assert!(inventory.list_by_reception(reception_id).await.unwrap().is_empty());
}


#[tokio::test]
async fn test_add_one_after_close() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &["food"]).await;
    let receptions = ReceptionService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());

    receptions.close(point_id).await.unwrap();

    let err = inventory.add_one(reception_id, "food").await.unwrap_err();
    assert!(matches!(err, ServiceError::ReceptionAlreadyClosed(id) if id == reception_id));

    // 关单后库存原样可读
    assert_eq!(inventory.list_by_reception(reception_id).await.unwrap().len(), 1);
}


#[tokio::test]
async fn test_add_batch_single_insert() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    let types = vec![
        "electronics".to_string(),
        "food".to_string(),
        "clothing".to_string(),
    ];
    let created = inventory.add_batch(reception_id, &types).await.unwrap();

    assert_eq!(created.len(), 3);
    assert_eq!(created[0].product_type, ProductType::Electronics);
    assert_eq!(created[1].product_type, ProductType::Food);
    assert_eq!(created[2].product_type, ProductType::Clothing);

    // 列表按登记顺序返回，seq 单调递增
    let listed = inventory.list_by_reception(reception_id).await.unwrap();
    assert_eq!(listed.len(), 3);
    for pair in listed.windows(2) {
        assert!(pair[0].seq < pair[1].seq);
    }
    let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    let created_ids: Vec<i64> = created.iter().map(|p| p.id).collect();
    assert_eq!(ids, created_ids);
}


#[tokio::test]
async fn test_add_batch_one_invalid_writes_nothing() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &["food"]).await;
    let inventory = InventoryService::new(pool.clone());

    let types = vec![
        "electronics".to_string(),
        "sofa".to_string(),
        "food".to_string(),
    ];
    let err = inventory.add_batch(reception_id, &types).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidProductType(ref t) if t == "sofa"));

    // 整批拒绝：之前的一件还在，批里的零件都没写进去
    assert_eq!(inventory.list_by_reception(reception_id).await.unwrap().len(), 1);
}


#[tokio::test]
async fn test_add_batch_empty_is_noop() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    let created = inventory.add_batch(reception_id, &[]).await.unwrap();
    assert!(created.is_empty());
    assert!(inventory.list_by_reception(reception_id).await.unwrap().is_empty());
}


#[tokio::test]
async fn test_add_batch_after_close() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let receptions = ReceptionService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());

    receptions.close(point_id).await.unwrap();

    let err = inventory
        .add_batch(reception_id, &["food".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ReceptionAlreadyClosed(_)));
    assert!(inventory.list_by_reception(reception_id).await.unwrap().is_empty());
}


#[tokio::test]
async fn test_remove_last_strict_lifo() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    let p1 = inventory.add_one(reception_id, "electronics").await.unwrap();
    let p2 = inventory.add_one(reception_id, "food").await.unwrap();
    let p3 = inventory.add_one(reception_id, "other").await.unwrap();

    // 撤货严格按加入的逆序
    assert_eq!(inventory.remove_last(reception_id).await.unwrap().id, p3.id);
    assert_eq!(inventory.remove_last(reception_id).await.unwrap().id, p2.id);
    assert_eq!(inventory.remove_last(reception_id).await.unwrap().id, p1.id);

    let err = inventory.remove_last(reception_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoProductsToRemove(id) if id == reception_id));
}


#[tokio::test]
async fn test_remove_last_after_batch_uses_seq_tiebreak() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    // 同一批货品共享同一个 created_at，LIFO 靠 seq 决出次序
    let types = vec!["electronics".to_string(), "food".to_string()];
    let created = inventory.add_batch(reception_id, &types).await.unwrap();
    assert_eq!(created[0].created_at, created[1].created_at);

    assert_eq!(
        inventory.remove_last(reception_id).await.unwrap().id,
        created[1].id
    );
    assert_eq!(
        inventory.remove_last(reception_id).await.unwrap().id,
        created[0].id
    );
    assert!(matches!(
        inventory.remove_last(reception_id).await.unwrap_err(),
        ServiceError::NoProductsToRemove(_)
    ));
}


#[tokio::test]
async fn test_remove_last_empty_reception() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    // 空收货单合法，但无货可撤
    let err = inventory.remove_last(reception_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoProductsToRemove(_)));
}


#[tokio::test]
async fn test_remove_last_closed_reception() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &["food"]).await;
    let receptions = ReceptionService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());

    receptions.close(point_id).await.unwrap();

    let err = inventory.remove_last(reception_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::ReceptionAlreadyClosed(_)));
    assert_eq!(inventory.list_by_reception(reception_id).await.unwrap().len(), 1);
}


#[tokio::test]
async fn test_remove_last_unknown_reception() {
    let (_dir, pool) = open_test_db().await;
    let inventory = InventoryService::new(pool.clone());

    let err = inventory.remove_last(404).await.unwrap_err();
    assert!(matches!(err, ServiceError::ReceptionNotFound(404)));
}


#[tokio::test]
async fn test_last_in_reception_tail_read() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &[]).await;
    let inventory = InventoryService::new(pool.clone());

    assert!(inventory.last_in_reception(reception_id).await.unwrap().is_none());

    let a = inventory.add_one(reception_id, "food").await.unwrap();
    assert_eq!(
        inventory.last_in_reception(reception_id).await.unwrap().unwrap().id,
        a.id
    );

    let b = inventory.add_one(reception_id, "other").await.unwrap();
    assert_eq!(
        inventory.last_in_reception(reception_id).await.unwrap().unwrap().id,
        b.id
    );

    inventory.remove_last(reception_id).await.unwrap();
    assert_eq!(
        inventory.last_in_reception(reception_id).await.unwrap().unwrap().id,
        a.id
    );
}


#[tokio::test]
async fn test_get_product_by_id() {
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Point A").await;
    let reception_id = open_with_products(&pool, point_id, &["clothing"]).await;
    let inventory = InventoryService::new(pool.clone());

    let listed = inventory.list_by_reception(reception_id).await.unwrap();
    let p = inventory.get_by_id(listed[0].id).await.unwrap();
    assert_eq!(p.product_type, ProductType::Clothing);

    let err = inventory.get_by_id(404).await.unwrap_err();
    assert!(matches!(err, ServiceError::ProductNotFound(404)));
}


#[tokio::test]
async fn test_scenario_intake_flow() {
    // 完整场景：开单 → 加货 → 非法类型被拒 → 关单 → 关单后加货被拒
    let (_dir, pool) = open_test_db().await;
    let point_id = seed_pickup_point(&pool, "Scenario Point").await;
    let receptions = ReceptionService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());

    let r = receptions.open(point_id).await.unwrap();
    inventory.add_one(r.id, "electronics").await.unwrap();

    let err = inventory.add_one(r.id, "bogus").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidProductType(_)));
    assert_eq!(inventory.list_by_reception(r.id).await.unwrap().len(), 1);

    receptions.close(point_id).await.unwrap();

    let err = inventory.add_one(r.id, "food").await.unwrap_err();
    assert!(matches!(err, ServiceError::ReceptionAlreadyClosed(_)));
    assert_eq!(inventory.list_by_reception(r.id).await.unwrap().len(), 1);

    let err = receptions.close(point_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoOpenReception(_)));
}
