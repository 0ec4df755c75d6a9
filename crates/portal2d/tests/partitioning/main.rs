mod quadtree;
